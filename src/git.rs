use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;

use camino::Utf8Path;
use command_error::CommandExt;
use command_error::OutputContext;
use miette::Context;
use tracing::instrument;

/// `git` CLI wrapper.
#[derive(Debug, Default)]
pub struct Git {}

impl Git {
    pub fn new() -> Self {
        Default::default()
    }

    /// Get a `git` command.
    pub fn command(&self) -> Command {
        Command::new("git")
    }

    /// `git clone {url} {destination}`, attached to our standard streams.
    pub fn clone_command(&self, url: &str, destination: &Utf8Path) -> Command {
        let mut command = self.command();
        command
            .arg("clone")
            .arg(url)
            .arg(destination)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    /// Clone `url` into `destination` and wait for `git` to finish.
    ///
    /// `git` exiting unsuccessfully is not an error; the status is returned so the caller can
    /// mirror it. Failing to run `git` at all is an error.
    #[instrument(level = "trace")]
    pub fn clone_repository(&self, url: &str, destination: &Utf8Path) -> miette::Result<ExitStatus> {
        Ok(self
            .clone_command(url, destination)
            .status_checked_as(|context: OutputContext<ExitStatus>| {
                Ok::<_, command_error::Error>(context.status())
            })
            .wrap_err("Failed to run git")?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clone_command() {
        let command = Git::new().clone_command(
            "git@github.com:puppy/doggy.git",
            Utf8Path::new("/home/puppy/src/github.com/puppy/doggy"),
        );
        assert_eq!(command.get_program(), "git");
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            [
                "clone",
                "git@github.com:puppy/doggy.git",
                "/home/puppy/src/github.com/puppy/doggy"
            ]
        );
    }
}
