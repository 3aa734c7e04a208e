use arthavivek::app::ArthaVivek;
use arthavivek::cli::handle_ask_command;
use arthavivek::cli::handle_config_command;
use arthavivek::cli::handle_ingest_knowledge;
use arthavivek::cli::handle_ingest_updates;
use arthavivek::cli::handle_init_command;
use arthavivek::cli::handle_serve_api;
use arthavivek::cli::handle_updates_command;
use arthavivek::cli::print_error;
use arthavivek::cli::Cli;
use arthavivek::cli::Commands;
use arthavivek::cli::IngestCommands;
use arthavivek::config::AppConfig;
use arthavivek::Result;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load_from(cli.config.as_deref())?;

    // Initialize logging
    if cli.verbose {
        arthavivek::logging::init_logging_with_level("debug", &config)?;
    } else {
        arthavivek::logging::init_logging_with_config(&config)?;
    }
    info!("Configuration loaded successfully");

    if let Commands::Config = cli.command {
        return handle_config_command(&config);
    }

    let app = ArthaVivek::connect(&config).await?;

    match cli.command {
        Commands::Init => handle_init_command(&app).await,
        Commands::Ask {
            question,
            persona,
            language,
            json,
        } => handle_ask_command(&app, &question, &persona, language.as_deref(), json).await,
        Commands::Updates { limit } => handle_updates_command(&app, limit).await,
        Commands::Ingest(IngestCommands::Knowledge { file, no_summarize }) => {
            handle_ingest_knowledge(&app, &file, no_summarize).await
        }
        Commands::Ingest(IngestCommands::Updates { file }) => {
            handle_ingest_updates(&app, &file).await
        }
        Commands::Serve { host, port, cors } => {
            handle_serve_api(&app, &config, host, port, cors).await
        }
        Commands::Config => handle_config_command(&config),
    }
}
