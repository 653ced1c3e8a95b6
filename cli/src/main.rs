//! CLI entrypoint for atiende
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use atiende_application::{AgentProvider, MessageHandler};
use atiende_infrastructure::{
    CitizenAgentFactory, ConfigLoader, FileConfig, FileLoggingConfig, JsonlConversationLogger,
};
use atiende_presentation::{AppState, Cli, Command};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_tracing(cli.verbose, &config.logging)?;

    info!("Starting atiende");

    // === Dependency Injection ===
    let handler = build_handler(&config);

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
        static_dir: None,
    }) {
        Command::Serve {
            host,
            port,
            static_dir,
        } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            if static_dir.is_some() {
                server.static_dir = static_dir;
            }

            atiende_presentation::serve(
                &server.bind_address(),
                AppState::new(handler),
                server.static_dir.as_deref(),
            )
            .await
            .with_context(|| format!("server on {} failed", server.bind_address()))?;
        }
        Command::Ask { message, user_id } => {
            let session_id = uuid::Uuid::new_v4().to_string();
            let reply = handler.handle_message(&message, &user_id, &session_id).await;
            println!("{}", reply);
        }
    }

    Ok(())
}

fn build_handler(config: &FileConfig) -> MessageHandler {
    let factory = Arc::new(CitizenAgentFactory::new(config));
    let provider = Arc::new(AgentProvider::new(factory));
    let mut handler = MessageHandler::new(provider);

    if let Some(path) = &config.logging.conversation_log
        && let Some(logger) = JsonlConversationLogger::new(path)
    {
        info!("Conversation log: {}", logger.path().display());
        handler = handler.with_conversation_logger(Arc::new(logger));
    }

    handler
}

/// Console output filtered by `RUST_LOG` or `-v`, plus an optional
/// daily-rotated file under `logging.log_dir`.
fn init_tracing(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = fmt::layer().with_target(false);

    match &logging.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "atiende.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            Ok(None)
        }
    }
}
