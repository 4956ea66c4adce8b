//! `git-get` clones Git repositories into a directory tree mirroring their URLs.
//!
//! `git get joneskoo/git-get` runs
//! `git clone git@github.com:joneskoo/git-get.git ~/src/github.com/joneskoo/git-get`, regardless
//! of the current working directory.
//!
//! The `git-get` Rust library is a convenience and shouldn't be depended on.

mod app;
mod cli;
mod clone;
mod config;
mod expand;
mod git;
mod home;
mod install_tracing;
mod target_dir;

#[cfg(test)]
mod url_proptest;

pub use app::App;
pub use cli::Cli;
pub use clone::ClonePlan;
pub use config::Config;
pub use config::Settings;
pub use expand::expand;
pub use git::Git;
pub use home::expand_home;
pub use target_dir::target_dir;
pub use target_dir::TargetDirError;
