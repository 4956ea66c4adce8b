use std::ffi::OsString;
use std::process::Command;

use camino::Utf8Path;
use camino::Utf8PathBuf;
use clonable_command::Command as ClonableCommand;
use command_error::CommandExt;
use fs_err as fs;
use itertools::Itertools;
use miette::IntoDiagnostic;
use tempfile::TempDir;

mod repo_state;

pub use repo_state::RepoState;

/// `git-get` session for integration testing.
///
/// `$HOME` is a temporary directory, so repositories are cloned into `$HOME/src` by default.
/// Shorthands expand to `file://$HOME/remote/PROJECT/REPOSITORY.git`; use [`GitGet::setup_repo`]
/// to create those.
pub struct GitGet {
    command: ClonableCommand,
    #[allow(dead_code)]
    tempdir: TempDir,
    home: Utf8PathBuf,
    git_get: OsString,
    git_get_args: Vec<String>,
}

impl GitGet {
    pub fn new() -> miette::Result<Self> {
        let tempdir = tempfile::tempdir().into_diagnostic()?;
        let home: Utf8PathBuf = tempdir.path().to_owned().try_into().into_diagnostic()?;

        let gitconfig = home.join(".gitconfig");
        fs::write(
            &gitconfig,
            "[user]\n\
            name = Puppy Doggy\n\
            email = dog@becca.ooo\n\
            \n\
            [init]\n\
            defaultBranch = main\n\
            ",
        )
        .into_diagnostic()?;

        let git_get = test_bin::get_test_bin("git-get").get_program().to_owned();

        let log_filters = ["debug", "git_get=trace"].into_iter().join(",");

        let git_get_args = vec!["--log".to_owned(), log_filters];

        let prefix = format!("file://{home}/remote/");

        let command = ClonableCommand::new("")
            .envs([
                // > Whether to skip reading settings from the system-wide $(prefix)/etc/gitconfig file.
                ("GIT_CONFIG_NOSYSTEM", "1"),
                ("GIT_CONFIG_GLOBAL", gitconfig.as_str()),
                ("GIT_AUTHOR_DATE", "2019-07-06T18:25:00-0700"),
                ("GIT_COMMITTER_DATE", "2019-07-06T18:25:00-0700"),
                ("HOME", home.as_str()),
                ("GIT_GET_PREFIX", prefix.as_str()),
                ("GIT_GET_ROOT", ""),
                ("NO_COLOR", "1"),
            ])
            .current_dir(&home);

        Ok(Self {
            command,
            tempdir,
            home,
            git_get,
            git_get_args,
        })
    }

    fn any_command(&self, program: &str) -> Command {
        let mut command = self.command.clone();
        command.name = program.into();
        command.to_std()
    }

    /// A `git-get` command.
    pub fn cmd(&self) -> Command {
        let mut command = self.command.clone();
        command.name = self.git_get.clone();
        command = command.args(&self.git_get_args);
        command.to_std()
    }

    /// A `git-get` command with the given `--log` filter instead of the default debug logging.
    pub fn cmd_with_log(&self, filter: &str) -> Command {
        let mut command = self.command.clone();
        command.name = self.git_get.clone();
        command = command.args(["--log", filter]);
        command.to_std()
    }

    /// A path in the temporary home directory.
    pub fn path(&self, tail: &str) -> Utf8PathBuf {
        self.home.join(tail)
    }

    /// The `file://` clone URL for a path in the temporary home directory.
    pub fn url(&self, tail: &str) -> String {
        format!("file://{}", self.path(tail))
    }

    /// Where a repository at `path` is cloned to, when cloned with a `file://` URL.
    ///
    /// `root` is relative to the home directory.
    pub fn destination(&self, root: &str, path: &str) -> Utf8PathBuf {
        let path = self.path(path);
        let path = path.as_str().strip_suffix(".git").unwrap_or(path.as_str());
        let relative = Utf8Path::new(path.trim_start_matches('/'));
        self.path(root).join(relative.as_str().to_lowercase())
    }

    pub fn sh(&self, script: &str) -> miette::Result<()> {
        let tempfile = tempfile::NamedTempFile::new().into_diagnostic()?;
        fs::write(
            &tempfile,
            format!(
                "set -ex\n\
                {script}"
            ),
        )
        .into_diagnostic()?;
        self.any_command("bash")
            .arg("--norc")
            .arg(tempfile.as_ref())
            .status_checked()
            .into_diagnostic()?;
        Ok(())
    }

    /// Set up a new repository in `path` with a single commit.
    pub fn setup_repo(&self, path: &str) -> miette::Result<Utf8PathBuf> {
        let path = self.path(path);
        let path_quoted = shell_words::quote(path.as_str());
        self.sh(&format!(
            r#"
            mkdir -p {path_quoted}
            cd {path_quoted} || exit
            git init
            echo "puppy doggy" > README.md
            git add .
            git commit -m "Initial commit"
            "#
        ))?;
        Ok(path)
    }

    /// Construct a repository state which a real repository can be checked against.
    pub fn repo_state(&self, root: impl AsRef<Utf8Path>) -> RepoState {
        RepoState::new(self.any_command("git"), root.as_ref().to_owned())
    }
}
