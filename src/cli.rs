use clap::Parser;

/// Clone Git repositories into a uniform directory tree.
///
/// Regardless of the working directory, `git get joneskoo/git-get` expands to
/// `git clone git@github.com:joneskoo/git-get.git ~/src/github.com/joneskoo/git-get`.
#[derive(Debug, Clone, Parser)]
#[command(version, author, about)]
#[command(max_term_width = 100)]
#[command(after_help = "Examples:
  git get joneskoo/git-get                    # PROJECT/REPOSITORY
  git get git@github.com:joneskoo/git-get     # URL

Environment variables:
  GIT_GET_ROOT      Directory to clone into [default: ~/src]
  GIT_GET_PREFIX    Prefix for PROJECT/REPOSITORY shorthands [default: git@github.com:]")]
pub struct Cli {
    /// Log filter directives, of the form `target[span{field=value}]=level`, where all components
    /// except the level are optional.
    ///
    /// Try `debug` or `trace`.
    #[arg(long, default_value = "info", env = "GIT_GET_LOG")]
    pub log: String,

    /// Print the `git clone` command instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// The repository to clone, as `PROJECT/REPOSITORY` or a clone URL.
    #[arg(value_name = "URL|PROJECT/REPOSITORY")]
    pub repository: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_exactly_one_repository() {
        assert!(Cli::try_parse_from(["git-get"]).is_err());
        assert!(Cli::try_parse_from(["git-get", "puppy/doggy", "silly/goose"]).is_err());

        let cli = Cli::try_parse_from(["git-get", "--dry-run", "puppy/doggy"]).unwrap();
        assert_eq!(cli.repository, "puppy/doggy");
        assert!(cli.dry_run);
    }
}
