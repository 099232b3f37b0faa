//! Command-line interface definition.
use clap::{CommandFactory, Parser, Subcommand};

/// Top-level CLI entry point for the dotfiles symlink manager.
#[derive(Parser, Debug)]
#[command(
    name = "dotlink",
    about = "Link a fixed set of dotfiles into the home directory",
    version = crate::commands::version::version()
)]
pub struct Cli {
    /// Subcommand to run; usage is printed when absent.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Read dotfiles from this directory instead of the current directory
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,

    /// Print one JSON object per entry instead of the console report
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the state of every managed link
    Status,
    /// Create missing links, skipping anything already present
    Link,
    /// Remove links this tool created
    Unlink,
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the log file.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Link => "link",
            Self::Unlink => "unlink",
            Self::Version => "version",
        }
    }
}

/// Result of parsing the command line.
#[derive(Debug)]
pub enum Invocation {
    /// A subcommand to run.
    Run {
        /// The parsed arguments.
        cli: Cli,
        /// The selected subcommand.
        command: Command,
    },
    /// Text to print before exiting successfully: usage, help or version.
    Usage(String),
}

/// Parse `args`, turning anything that is not a known subcommand into usage
/// text rather than an error.
pub fn parse<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(command) => Invocation::Run { cli, command },
            None => Invocation::Usage(usage()),
        },
        Err(e)
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            Invocation::Usage(e.to_string())
        }
        Err(e) => {
            tracing::debug!("argument error: {e}");
            Invocation::Usage(usage())
        }
    }
}

/// Long help text listing every subcommand.
#[must_use]
pub fn usage() -> String {
    Cli::command().render_long_help().to_string()
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> (Cli, Command) {
        match parse(args.iter().copied()) {
            Invocation::Run { cli, command } => (cli, command),
            Invocation::Usage(text) => panic!("expected a command, got usage:\n{text}"),
        }
    }

    fn usage_of(args: &[&str]) -> String {
        match parse(args.iter().copied()) {
            Invocation::Usage(text) => text,
            Invocation::Run { command, .. } => panic!("expected usage, got {command:?}"),
        }
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subcommand_names() {
        let names: Vec<String> = Cli::command()
            .get_subcommands()
            .map(|c| c.get_name().to_string())
            .collect();
        insta::assert_snapshot!(names.join("\n"), @r"
        status
        link
        unlink
        version
        ");
    }

    #[test]
    fn parse_each_operation() {
        assert_eq!(run(&["dotlink", "status"]).1, Command::Status);
        assert_eq!(run(&["dotlink", "link"]).1, Command::Link);
        assert_eq!(run(&["dotlink", "unlink"]).1, Command::Unlink);
        assert_eq!(run(&["dotlink", "version"]).1, Command::Version);
    }

    #[test]
    fn parse_dry_run() {
        let (cli, _) = run(&["dotlink", "--dry-run", "link"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_dry_run_short_after_subcommand() {
        let (cli, _) = run(&["dotlink", "unlink", "-d"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_verbose() {
        let (cli, _) = run(&["dotlink", "-v", "status"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_root_override() {
        let (cli, _) = run(&["dotlink", "--root", "/tmp/dots", "link"]);
        assert_eq!(cli.global.root, Some(std::path::PathBuf::from("/tmp/dots")));
    }

    #[test]
    fn parse_json() {
        let (cli, _) = run(&["dotlink", "status", "--json"]);
        assert!(cli.global.json);
    }

    #[test]
    fn no_token_prints_usage() {
        let text = usage_of(&["dotlink"]);
        for name in ["status", "link", "unlink"] {
            assert!(text.contains(name), "usage should list {name}:\n{text}");
        }
    }

    #[test]
    fn unknown_token_prints_usage() {
        assert_eq!(usage_of(&["dotlink", "install"]), usage());
    }

    #[test]
    fn unknown_flag_prints_usage() {
        assert_eq!(usage_of(&["dotlink", "--frobnicate", "status"]), usage());
    }

    #[test]
    fn help_flag_is_usage() {
        assert!(usage_of(&["dotlink", "--help"]).contains("Usage:"));
    }

    #[test]
    fn version_flag_matches_version_subcommand() {
        let text = usage_of(&["dotlink", "--version"]);
        assert_eq!(
            text.trim_end(),
            format!("dotlink {}", crate::commands::version::version())
        );
    }

    #[test]
    fn command_names_match_subcommands() {
        assert_eq!(Command::Unlink.name(), "unlink");
        assert_eq!(Command::Version.name(), "version");
    }
}
