//! Property-based tests for clone URL expansion and target directories.

use proptest::prelude::*;

use crate::expand;
use crate::target_dir;

proptest! {
    /// Anything with a colon in it is already a URL.
    #[test]
    fn expand_leaves_colons_alone(reference in ".*:.*", prefix in ".*") {
        prop_assert_eq!(expand(&reference, &prefix), reference.as_str());
    }

    /// Without a slash there's no `PROJECT/REPOSITORY` to expand.
    #[test]
    fn expand_leaves_slashless_alone(reference in "[^/]*", prefix in ".*") {
        prop_assert_eq!(expand(&reference, &prefix), reference.as_str());
    }

    #[test]
    fn expand_shorthand(
        owner in "[^/:]+",
        repository in "[^/:]+",
        prefix in "[a-z@.]+:",
    ) {
        let reference = format!("{owner}/{repository}");
        let expected = format!("{prefix}{owner}/{repository}.git");
        prop_assert_eq!(expand(&reference, &prefix), expected.as_str());
    }

    #[test]
    fn target_dir_is_lowercase(url in "[a-zA-Z0-9@.]+:([a-zA-Z0-9._-][a-zA-Z0-9/._-]*)?") {
        let dir = target_dir(&url).unwrap();
        prop_assert_eq!(dir.as_str(), dir.as_str().to_lowercase());
    }

    /// Callers can include or leave off the `.git` suffix.
    #[test]
    fn target_dir_ignores_git_suffix(url in "(https://|ssh://|[a-z]+@)?[a-zA-Z0-9.]+[:/][a-zA-Z0-9/_-]*") {
        prop_assert_eq!(target_dir(&url), target_dir(&format!("{url}.git")));
    }

    #[test]
    fn target_dir_is_deterministic(url in ".*") {
        prop_assert_eq!(target_dir(&url), target_dir(&url));
    }
}
