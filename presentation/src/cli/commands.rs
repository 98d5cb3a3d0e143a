//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use rag_copilot_domain::{DomainError, TriggerId};
use std::path::PathBuf;

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON summary on stdout
    Json,
}

impl From<OutputFormat> for rag_copilot_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => rag_copilot_domain::OutputFormat::Text,
            OutputFormat::Json => rag_copilot_domain::OutputFormat::Json,
        }
    }
}

/// Entry points. All of them run the same query flow.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask a question and pick the documentation source
    Query,
    /// Ask about PrimeVue only
    QueryPrimevue,
    /// Ask about Nuxt only
    QueryNuxt,
    /// Ask about Nuxt and PrimeVue together
    QueryBoth,
    /// Run an entry point by trigger id (e.g. rag-copilot.queryNuxt)
    Trigger {
        /// Trigger identifier
        id: String,
    },
}

impl Command {
    pub fn trigger(&self) -> Result<TriggerId, DomainError> {
        match self {
            Command::Query => Ok(TriggerId::Query),
            Command::QueryPrimevue => Ok(TriggerId::QueryPrimeVue),
            Command::QueryNuxt => Ok(TriggerId::QueryNuxt),
            Command::QueryBoth => Ok(TriggerId::QueryBoth),
            Command::Trigger { id } => id.parse(),
        }
    }
}

/// CLI arguments for rag-copilot
#[derive(Parser, Debug)]
#[command(name = "rag-copilot")]
#[command(author, version, about = "Turn a question into a RAG prompt for your chat assistant")]
#[command(long_about = r#"
rag-copilot asks for a question, runs the RAG script in your workspace to
build a prompt from the Nuxt/PrimeVue documentation, then copies the prompt
to the clipboard and saves it next to your work.

The script is run as:
  <python_path> <rag_path>/quick_query.py "<question>" --db <primevue|nuxt|both>

Configuration files are loaded from (in priority order):
1. RAG_COPILOT_* environment variables
2. --config <path>        Explicit config file
3. ./rag-copilot.toml     Project-level config
4. ~/.config/rag-copilot/config.toml   Global config

Example:
  rag-copilot
  rag-copilot query-primevue --question "How to use DataTable?"
  rag-copilot trigger rag-copilot.queryNuxt
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Question to ask instead of prompting for it
    #[arg(long, global = true, value_name = "TEXT")]
    pub question: Option<String>,

    /// Workspace root (default: nearest directory with .git or rag-copilot.toml)
    #[arg(long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Output format for the run summary
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Trigger selected on the command line; the generic query by default
    pub fn trigger(&self) -> Result<TriggerId, DomainError> {
        self.command
            .as_ref()
            .map_or(Ok(TriggerId::Query), Command::trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rag_copilot_domain::KnowledgeSource;

    #[test]
    fn test_no_subcommand_is_generic_query() {
        let cli = Cli::try_parse_from(["rag-copilot"]).unwrap();
        assert_eq!(cli.trigger().unwrap(), TriggerId::Query);
        assert_eq!(cli.trigger().unwrap().preset(), None);
    }

    #[test]
    fn test_prebound_subcommands() {
        for (arg, source) in [
            ("query-primevue", KnowledgeSource::PrimeVue),
            ("query-nuxt", KnowledgeSource::Nuxt),
            ("query-both", KnowledgeSource::Both),
        ] {
            let cli = Cli::try_parse_from(["rag-copilot", arg]).unwrap();
            assert_eq!(cli.trigger().unwrap().preset(), Some(source), "{arg}");
        }
    }

    #[test]
    fn test_trigger_by_identifier() {
        let cli = Cli::try_parse_from(["rag-copilot", "trigger", "rag-copilot.queryNuxt"]).unwrap();
        assert_eq!(cli.trigger().unwrap(), TriggerId::QueryNuxt);

        let cli = Cli::try_parse_from(["rag-copilot", "trigger", "rag-copilot.nope"]).unwrap();
        assert!(cli.trigger().is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rag-copilot",
            "query-both",
            "--question",
            "How do \"slots\" work?",
            "-vv",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.question.as_deref(), Some("How do \"slots\" work?"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}
