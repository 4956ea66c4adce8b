use camino::Utf8Path;
use camino::Utf8PathBuf;
use miette::miette;

/// The current user's home directory.
pub fn home_dir() -> miette::Result<Utf8PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| miette!("Could not determine home directory"))?;
    Utf8PathBuf::try_from(home)
        .map_err(|err| miette!("Home directory is not valid UTF-8: {}", err.as_path().display()))
}

/// Expand a leading `~` in `path` to the home directory.
///
/// `home` is only called if `path` starts with `~`. `~user` paths are not supported.
pub fn expand_home(
    path: &str,
    home: impl FnOnce() -> miette::Result<Utf8PathBuf>,
) -> miette::Result<Utf8PathBuf> {
    let rest = match path.strip_prefix('~') {
        Some(rest) => rest,
        None => return Ok(path.into()),
    };

    let rest = match rest.chars().next() {
        None => "",
        Some('/' | '\\') => &rest[1..],
        Some(_) => return Err(miette!("Cannot expand user-specific home dir: {path}")),
    };

    let home = home()?;
    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(Utf8Path::new(rest)))
    }
}
