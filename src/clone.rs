use std::fmt::Display;
use std::process::ExitCode;
use std::process::ExitStatus;

use calm_io::stdout;
use camino::Utf8Path;
use camino::Utf8PathBuf;
use command_error::Utf8ProgramAndArgs;
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use tracing::instrument;

use crate::expand::expand;
use crate::git::Git;
use crate::target_dir::target_dir;
use crate::target_dir::TargetDirError;

/// A resolved `git clone`: where from, and where to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonePlan {
    /// The absolute clone URL.
    pub url: String,
    /// Where the repository will be cloned to.
    pub destination: Utf8PathBuf,
}

impl ClonePlan {
    /// Expand `repository` with `prefix` and find its destination under `root`.
    pub fn new(repository: &str, prefix: &str, root: &Utf8Path) -> Result<Self, TargetDirError> {
        let url = expand(repository, prefix).into_owned();
        let destination = root.join(target_dir(&url)?);
        Ok(Self { url, destination })
    }

    /// Run `git clone` and mirror its exit code.
    ///
    /// With `dry_run`, only print the command that would be run to stdout.
    #[instrument(level = "trace")]
    pub fn execute(&self, git: &Git, dry_run: bool) -> miette::Result<ExitCode> {
        if dry_run {
            stdout!("{}\n", self.command_line(git)).into_diagnostic()?;
            return Ok(ExitCode::SUCCESS);
        }

        tracing::debug!("{self}");
        let status = git.clone_repository(&self.url, &self.destination)?;
        if !status.success() {
            tracing::debug!(%status, "git clone failed");
        }
        Ok(ExitCode::from(exit_code(status)))
    }

    /// The shell-quoted `git clone` command line, prefixed with `$`.
    pub fn command_line(&self, git: &Git) -> String {
        let command = git.clone_command(&self.url, &self.destination);
        format!(
            "{} {}",
            '$'.if_supports_color(Stream::Stdout, |text| text.green()),
            Utf8ProgramAndArgs::from(&command)
        )
    }
}

impl Display for ClonePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cloning {} into {}",
            self.url
                .if_supports_color(Stream::Stdout, |text| text.cyan()),
            self.destination
                .if_supports_color(Stream::Stdout, |text| text.cyan()),
        )
    }
}

/// The exit code to mirror for a finished child process.
///
/// Processes without an exit code (killed by a signal) and codes that don't fit in a byte map to
/// `1`.
fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}
