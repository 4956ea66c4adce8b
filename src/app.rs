use std::process::ExitCode;

use crate::clone::ClonePlan;
use crate::config::Config;
use crate::git::Git;

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn git(&self) -> Git {
        Git::new()
    }

    pub fn run(self) -> miette::Result<ExitCode> {
        let plan = ClonePlan::new(
            &self.config.cli.repository,
            &self.config.prefix,
            &self.config.root,
        )?;
        plan.execute(&self.git(), self.config.cli.dry_run)
    }
}
