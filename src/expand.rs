use std::borrow::Cow;

/// Expand a `PROJECT/REPOSITORY` shorthand into an absolute clone URL.
///
/// Anything containing a `:` is already absolute (`https://...`, `user@host:path`) and is
/// returned unchanged, as is anything without a `/`.
///
/// ```
/// # use git_get::expand;
/// assert_eq!(
///     expand("joneskoo/git-get", "git@github.com:"),
///     "git@github.com:joneskoo/git-get.git"
/// );
/// assert_eq!(expand("hello", "git@github.com:"), "hello");
/// ```
pub fn expand<'a>(reference: &'a str, prefix: &str) -> Cow<'a, str> {
    if reference.contains(':') {
        return Cow::Borrowed(reference);
    }
    match reference.split_once('/') {
        Some((owner, repository)) => Cow::Owned(format!("{prefix}{owner}/{repository}.git")),
        None => Cow::Borrowed(reference),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const GITHUB: &str = "git@github.com:";

    #[test]
    fn test_expand_plain_name() {
        assert_eq!(expand("hello", GITHUB), "hello");
    }

    #[test]
    fn test_expand_absolute_unchanged() {
        assert_eq!(
            expand("https://github.com/joneskoo/git-get", GITHUB),
            "https://github.com/joneskoo/git-get"
        );
        assert_eq!(
            expand("git@github.com:joneskoo/git-get.git", GITHUB),
            "git@github.com:joneskoo/git-get.git"
        );
        assert_eq!(
            expand("ssh://git@github.com:joneskoo/git-get.git", GITHUB),
            "ssh://git@github.com:joneskoo/git-get.git"
        );
        assert!(matches!(
            expand("hostname:project/repo", GITHUB),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_expand_shorthand() {
        assert_eq!(
            expand("joneskoo/git-get", GITHUB),
            "git@github.com:joneskoo/git-get.git"
        );
        assert_eq!(
            expand("joneskoo/git-get", "https://example.com/"),
            "https://example.com/joneskoo/git-get.git"
        );
    }

    #[test]
    fn test_expand_splits_on_first_slash() {
        assert_eq!(
            expand("group/subgroup/repo", "https://gitlab.com/"),
            "https://gitlab.com/group/subgroup/repo.git"
        );
        // The `.git` suffix is appended unconditionally.
        assert_eq!(
            expand("puppy/doggy.git", GITHUB),
            "git@github.com:puppy/doggy.git.git"
        );
    }
}
