use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use hush_core::VERSION;

/// Hush - a local, encrypted password vault
#[derive(Parser)]
#[command(name = "hush")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vault directory
    #[arg(long, global = true, env = "HUSH_DIR", value_name = "DIR")]
    pub vault: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry name (letters, digits, hyphen, dot)
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `get` command
#[derive(Args)]
pub struct GetArgs {
    /// Entry name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the password instead of copying it to the clipboard
    #[arg(short, long)]
    pub display: bool,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Entry name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `generate` command
#[derive(Args)]
pub struct GenerateArgs {
    /// Password length (default from config, 16)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Store the generated password under this name
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Print the password instead of copying it to the clipboard
    #[arg(short, long)]
    pub display: bool,
}

/// Arguments for the `implode` command
#[derive(Args)]
pub struct ImplodeArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new vault protected by a master password
    Init,

    /// Store a password (replaces any existing value)
    #[command(visible_alias = "a")]
    Add(AddArgs),

    /// Copy a stored password to the clipboard
    #[command(visible_alias = "g")]
    Get(GetArgs),

    /// Delete a stored password
    #[command(visible_alias = "rm")]
    Remove(RemoveArgs),

    /// List stored entry names
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Generate a random password
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Delete the whole vault
    Implode(ImplodeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_aliases_parse() {
        let cli = Cli::try_parse_from(["hush", "a", "bank"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add(ref args)) if args.name == "bank"));

        let cli = Cli::try_parse_from(["hush", "rm", "bank"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Remove(_))));

        let cli = Cli::try_parse_from(["hush", "ls", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(ref args)) if args.json));

        let cli = Cli::try_parse_from(["hush", "gen", "-l", "24"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Generate(ref args)) if args.length == Some(24)
        ));
    }

    #[test]
    fn test_display_flag_parses() {
        let cli = Cli::try_parse_from(["hush", "get", "bank", "-d"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Get(ref args)) if args.display));

        let cli = Cli::try_parse_from(["hush", "gen", "--display"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Generate(ref args)) if args.display));

        let cli = Cli::try_parse_from(["hush", "get", "bank"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Get(ref args)) if !args.display));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["hush", "list", "--vault", "/tmp/v", "-q"]).unwrap();
        assert_eq!(cli.vault, Some(PathBuf::from("/tmp/v")));
        assert!(cli.quiet);
    }

    #[test]
    fn test_get_requires_name() {
        assert!(Cli::try_parse_from(["hush", "get"]).is_err());
    }
}
