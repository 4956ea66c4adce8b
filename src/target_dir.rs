use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use camino::Utf8PathBuf;
use miette::Diagnostic;

/// Where should `clone_url` be cloned to, relative to the source root?
///
/// The result is the host followed by the path components of the URL, with any `.git` suffix
/// and username removed, all lowercase:
///
/// ```
/// # use git_get::target_dir;
/// assert_eq!(
///     target_dir("git@github.com:joneskoo/git-get.git").unwrap(),
///     "github.com/joneskoo/git-get"
/// );
/// ```
///
/// Components are joined lexically: empty components and `.` are skipped, and `..` removes the
/// previous component, so the result never points outside of the source root.
pub fn target_dir(clone_url: &str) -> Result<Utf8PathBuf, TargetDirError> {
    let url = clone_url.strip_suffix(".git").unwrap_or(clone_url);

    let (host, path) = match url.split_once("://") {
        // `https://host/path`, `ssh://user@host/path`
        Some((_scheme, address)) => {
            address
                .split_once('/')
                .ok_or_else(|| TargetDirError::MissingPath {
                    url: url.to_owned(),
                })?
        }
        // `user@host:path`
        None => url.split_once(':').ok_or_else(|| TargetDirError::NotAUrl {
            url: url.to_owned(),
        })?,
    };

    let host = match host.rsplit_once('@') {
        Some((_username, host)) => host,
        None => host,
    };

    let mut components = Vec::new();
    for component in std::iter::once(host).chain(path.split('/')) {
        match component {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            component => components.push(component),
        }
    }

    let joined: Utf8PathBuf = components.into_iter().collect();
    Ok(joined.as_str().to_lowercase().into())
}

/// A clone URL we can't derive a directory from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetDirError {
    /// A `scheme://host` URL with nothing after the host.
    MissingPath { url: String },
    /// Neither a `scheme://` URL nor a `host:path` address.
    NotAUrl { url: String },
}

impl TargetDirError {
    /// The offending URL, without its `.git` suffix.
    pub fn url(&self) -> &str {
        match self {
            TargetDirError::MissingPath { url } | TargetDirError::NotAUrl { url } => url,
        }
    }
}

impl Display for TargetDirError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetDirError::MissingPath { url } => write!(f, "expected path in URL, got {url:?}"),
            TargetDirError::NotAUrl { url } => write!(
                f,
                "expected PROJECT/REPO or absolute git clone URL, got {url:?}"
            ),
        }
    }
}

impl Error for TargetDirError {}

impl Diagnostic for TargetDirError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(match self {
            TargetDirError::MissingPath { .. } => "git_get::missing_path",
            TargetDirError::NotAUrl { .. } => "git_get::not_a_url",
        }))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(
            "Try PROJECT/REPOSITORY, https://host/project/repository, or git@host:project/repository",
        ))
    }
}
