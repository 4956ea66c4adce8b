use std::process::ExitCode;

use git_get::App;
use git_get::Config;

fn main() -> miette::Result<ExitCode> {
    let config = Config::new()?;
    App::new(config).run()
}
