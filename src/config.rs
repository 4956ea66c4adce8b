use camino::Utf8PathBuf;
use clap::Parser;
use miette::Context;

use crate::cli::Cli;
use crate::home::expand_home;
use crate::home::home_dir;
use crate::install_tracing::install_tracing;

/// Configuration, both from the command-line and the environment.
#[derive(Debug)]
pub struct Config {
    /// Directory repositories are cloned into, with `~` expanded.
    pub root: Utf8PathBuf,
    /// Prefix for `PROJECT/REPOSITORY` shorthands.
    pub prefix: String,
    /// Command-line options.
    pub cli: Cli,
}

impl Config {
    pub fn new() -> miette::Result<Self> {
        let cli = Cli::parse();
        install_tracing(&cli.log)?;
        let settings = Settings::from_lookup(|name| std::env::var(name).ok());
        Self::from_parts(cli, settings, home_dir)
    }

    pub fn from_parts(
        cli: Cli,
        settings: Settings,
        home: impl FnOnce() -> miette::Result<Utf8PathBuf>,
    ) -> miette::Result<Self> {
        let root = expand_home(&settings.root, home)
            .wrap_err_with(|| format!("Failed to expand target path {:?}", settings.root))?;
        tracing::debug!(%root, prefix = %settings.prefix, "Resolved configuration");
        Ok(Self {
            root,
            prefix: settings.prefix,
            cli,
        })
    }
}

/// Settings read from the environment, before the root has been expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: String,
    pub prefix: String,
}

impl Settings {
    pub const ROOT_VAR: &str = "GIT_GET_ROOT";
    pub const PREFIX_VAR: &str = "GIT_GET_PREFIX";

    pub const DEFAULT_ROOT: &str = "~/src";
    pub const DEFAULT_PREFIX: &str = "git@github.com:";

    /// Read settings with `lookup`, which gets the value of an environment variable.
    ///
    /// Unset and empty variables both use the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        Self {
            root: get(Self::ROOT_VAR, Self::DEFAULT_ROOT),
            prefix: get(Self::PREFIX_VAR, Self::DEFAULT_PREFIX),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
