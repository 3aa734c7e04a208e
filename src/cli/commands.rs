//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "arthavivek")]
#[command(about = "ArthaVivek: financial guidance for India's youth, grounded in a curated knowledge base")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize database schema and indexes
    Init,
    /// Ask the financial coach a question
    Ask {
        /// The question, e.g. "How can I start investing with ₹500?"
        question: String,
        /// Who is asking: student or professional
        #[arg(short, long, default_value = "student")]
        persona: String,
        /// Also show the answer in this language, e.g. "Hindi", "ta" or "मराठी (Marathi)"
        #[arg(short, long)]
        language: Option<String>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the latest financial news and policy updates
    Updates {
        /// Maximum number of updates (defaults to retrieval.updates_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Load records into the knowledge store
    #[command(subcommand)]
    Ingest(IngestCommands),
    /// Start the HTTP API server
    Serve {
        /// Host to bind (defaults to server.host)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable permissive CORS
        #[arg(long)]
        cors: bool,
    },
    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
pub enum IngestCommands {
    /// Ingest knowledge records from a JSON array file
    Knowledge {
        /// Path to the JSON file
        file: PathBuf,
        /// Fail records that only carry source text instead of summarising them
        #[arg(long)]
        no_summarize: bool,
    },
    /// Ingest update articles from a JSON array file
    Updates {
        /// Path to the JSON file
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask_defaults() {
        let cli = Cli::try_parse_from(["arthavivek", "ask", "What is a SIP?"]).unwrap();
        match cli.command {
            Commands::Ask {
                question,
                persona,
                language,
                json,
            } => {
                assert_eq!(question, "What is a SIP?");
                assert_eq!(persona, "student");
                assert!(language.is_none());
                assert!(!json);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_parse_ask_language() {
        let cli = Cli::try_parse_from([
            "arthavivek",
            "ask",
            "What is a SIP?",
            "--language",
            "Hindi",
            "--persona",
            "professional",
        ])
        .unwrap();
        match cli.command {
            Commands::Ask {
                persona, language, ..
            } => {
                assert_eq!(persona, "professional");
                assert_eq!(language.as_deref(), Some("Hindi"));
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "arthavivek",
            "updates",
            "--limit",
            "3",
            "--verbose",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Updates { limit: Some(3) }));
    }

    #[test]
    fn test_parse_ingest_knowledge() {
        let cli = Cli::try_parse_from([
            "arthavivek",
            "ingest",
            "knowledge",
            "data/knowledge.json",
            "--no-summarize",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Ingest(IngestCommands::Knowledge { no_summarize: true, .. })
        ));
    }
}
