use std::process::Command;

use camino::Utf8PathBuf;
use command_error::CommandExt;
use expect_test::Expect;
use fs_err as fs;
use itertools::Itertools;
use pretty_assertions::Comparison;

/// A cloned repository's state, which can be checked against a real repository.
#[derive(Debug)]
pub struct RepoState {
    git: Command,
    root: Utf8PathBuf,
    origin: Option<String>,
    branch: Option<String>,
    files: Vec<(String, Expect)>,
}

impl RepoState {
    /// Construct a new repository state rooted at `root`, using `git` as a template for `git`
    /// commands.
    pub fn new(git: Command, root: Utf8PathBuf) -> Self {
        Self {
            git,
            root,
            origin: Default::default(),
            branch: Default::default(),
            files: Default::default(),
        }
    }

    /// Expect the repository's `origin` remote to have the given URL.
    pub fn origin(mut self, url: &str) -> Self {
        self.origin = Some(url.to_owned());
        self
    }

    /// Expect the repository to have the given branch checked out.
    pub fn branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_owned());
        self
    }

    /// Expect a file at the given path to have the given contents.
    pub fn file(mut self, path: &str, contents: Expect) -> Self {
        self.files.push((path.to_owned(), contents));
        self
    }

    fn git_stdout(&self, args: &[&str]) -> Result<String, String> {
        let mut command = Command::new(self.git.get_program());
        command.envs(
            self.git
                .get_envs()
                .filter_map(|(key, value)| value.map(|value| (key, value))),
        );
        command
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output_checked_utf8()
            .map(|output| output.stdout.trim().to_owned())
            .map_err(|err| err.to_string())
    }

    fn check_value(
        &self,
        problems: &mut Vec<String>,
        what: &str,
        expected: &Option<String>,
        args: &[&str],
    ) {
        if let Some(expected) = expected {
            match self.git_stdout(args) {
                Ok(actual) => {
                    if &actual != expected {
                        problems.push(format!(
                            "{what} differs:\n{}",
                            Comparison::new(&actual, expected)
                        ));
                    }
                }
                Err(err) => problems.push(format!("Failed to get {what}: {err}")),
            }
        }
    }

    /// Assert that the repository state matches the actual repository.
    ///
    /// # Panics
    ///
    /// If the repository state doesn't match the actual repository.
    #[track_caller]
    pub fn assert(&self) {
        if !self.root.join(".git").exists() {
            panic!("No repository at {}", self.root);
        }

        let mut problems = Vec::new();

        self.check_value(
            &mut problems,
            "origin URL",
            &self.origin,
            &["remote", "get-url", "origin"],
        );
        self.check_value(
            &mut problems,
            "branch",
            &self.branch,
            &["branch", "--show-current"],
        );

        for (path, contents) in &self.files {
            match fs::read_to_string(self.root.join(path)) {
                Ok(actual_contents) => contents.assert_eq(&actual_contents),
                Err(err) => problems.push(format!("Failed to read {path}: {err}")),
            }
        }

        if !problems.is_empty() {
            panic!(
                "Repository {} differs:\n{}",
                self.root,
                problems.iter().map(|problem| format!("• {problem}")).join("\n")
            );
        }
    }
}
