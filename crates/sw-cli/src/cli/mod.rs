use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `swise` binary.
#[derive(Debug, Parser)]
#[command(
    name = "swise",
    version,
    about = "suppwise - supplement interaction evidence and risk analysis"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no spinners)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["swise", "--format", "json", "--verbose", "facts", "Iron"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Facts(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["swise", "analyze", "철분, 칼슘", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Analyze(_)));
    }

    #[test]
    fn default_format_is_text() {
        let cli = Cli::try_parse_from(["swise", "facts", "Zinc"]).expect("cli should parse");
        assert_eq!(cli.global_flags().format, OutputFormat::Text);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["swise", "--format", "table", "facts", "Zinc"]);
        assert!(parsed.is_err());
    }
}
