//! CLI argument definitions using clap
//!
//! The verbs themselves are not clap subcommands: dispatch and the help
//! listing share the command table in [`crate::dispatch`] as their single
//! source of truth, so clap only owns the outer flags and captures the verb
//! plus anything after it verbatim.

use clap::Parser;

/// Dev-stack control for the LeadForge services
#[derive(Parser, Debug)]
#[command(name = "forgectl")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
#[command(after_help = crate::dispatch::help_listing())]
pub struct Cli {
    /// Enable debug output (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum, value_name = "SHELL")]
    pub generator: Option<clap_complete::Shell>,

    /// Command to run, followed by arguments forwarded to it verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_trailing_flags_when_parsed_then_kept_as_passthrough() {
        let cli = Cli::parse_from(["forgectl", "test", "-k", "enrichment"]);
        assert_eq!(cli.command, vec!["test", "-k", "enrichment"]);
        assert_eq!(cli.debug, 0);
    }

    #[test]
    fn given_debug_flags_before_verb_when_parsed_then_counted() {
        let cli = Cli::parse_from(["forgectl", "-d", "-d", "up"]);
        assert_eq!(cli.debug, 2);
        assert_eq!(cli.command, vec!["up"]);
    }

    #[test]
    fn given_flags_after_verb_when_parsed_then_forwarded_not_consumed() {
        // `-d` here belongs to the child tool, not to forgectl
        let cli = Cli::parse_from(["forgectl", "logs", "-d"]);
        assert_eq!(cli.debug, 0);
        assert_eq!(cli.command, vec!["logs", "-d"]);
    }
}
