//! CLI argument definitions for Text Vault.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use vault_model::ProcessingType;

#[derive(Parser)]
#[command(
    name = "text-vault",
    version,
    about = "Text Vault - transform text and keep the results",
    long_about = "Transform free-form text (case, whitespace, truncated SHA-256),\n\
                  preview the result with statistics, and keep saved entries\n\
                  in a local store."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the entry store (overrides the settings file).
    #[arg(long = "store", value_name = "DIR", global = true)]
    pub store: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow entry text to appear in logs (redacted by default).
    #[arg(long = "log-text", global = true)]
    pub log_text: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview processed text and its statistics without saving.
    Process(TextArgs),

    /// Process text and save it as a new entry.
    Save(TextArgs),

    /// List saved entries, most recent first.
    List,

    /// Show one saved entry.
    Show(ShowArgs),

    /// Reprocess a saved entry with another processing type.
    Update(UpdateArgs),

    /// Delete a saved entry.
    Delete(IdArgs),

    /// List all processing types.
    Types,

    /// Show or initialize the settings file.
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct TextArgs {
    /// Text to process (read from --file or stdin when omitted).
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file.
    #[arg(long = "file", short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Processing type (see `text-vault types`); defaults to the settings value.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub processing_type: Option<ProcessingType>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Entry id or a unique prefix of it.
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub target: IdArgs,

    /// Print the original text instead of the processed text.
    #[arg(long = "original")]
    pub original: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub target: IdArgs,

    /// New processing type.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub processing_type: ProcessingType,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the current settings to the settings file.
    #[arg(long = "init")]
    pub init: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use vault_model::DigestLength;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_processing_type() {
        let cli = Cli::parse_from(["text-vault", "process", "hello", "--type", "sha256-24"]);
        let Command::Process(args) = cli.command else {
            panic!("expected process command");
        };
        assert_eq!(args.text.as_deref(), Some("hello"));
        assert_eq!(
            args.processing_type,
            Some(ProcessingType::Sha256(DigestLength::Chars24))
        );
    }

    #[test]
    fn rejects_unknown_processing_type() {
        let result = Cli::try_parse_from(["text-vault", "save", "hello", "-t", "sha256-12"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_store_flag_after_subcommand() {
        let cli = Cli::parse_from(["text-vault", "list", "--store", "/tmp/vault"]);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/vault")));
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn update_requires_type() {
        assert!(Cli::try_parse_from(["text-vault", "update", "abc"]).is_err());
        let cli = Cli::parse_from(["text-vault", "update", "abc", "--type", "trim"]);
        let Command::Update(args) = cli.command else {
            panic!("expected update command");
        };
        assert_eq!(args.target.id, "abc");
        assert_eq!(args.processing_type, ProcessingType::Trim);
    }
}
