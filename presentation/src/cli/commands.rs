//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for atiende
#[derive(Parser, Debug)]
#[command(name = "atiende")]
#[command(author, version, about = "Citizen-service assistant answering from ChileAtiende fichas")]
#[command(long_about = r#"
atiende answers questions about Chilean public procedures. A dialogue agent
(Tomás) searches the ChileAtiende site, keeps only official fichas, and
replies in plain language.

Configuration files are loaded from (in priority order):
1. ATIENDE_* environment variables (e.g. ATIENDE_SERVER__PORT=8080)
2. --config <path>     Explicit config file
3. ./atiende.toml      Project-level config
4. ~/.config/atiende/config.toml   Global config

Credentials are read from FIRECRAWL_API_KEY and OPENAI_API_KEY by default.

Example:
  atiende serve --port 5000 --static-dir app/static
  atiende ask "¿Cómo renuevo mi cédula de identidad?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP chat server
    Serve {
        /// Bind address (overrides server.host)
        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        /// Listen port (overrides server.port)
        #[arg(short, long, value_name = "PORT", env = "PORT")]
        port: Option<u16>,

        /// Directory with the chat page to serve at `/`
        #[arg(long, value_name = "DIR")]
        static_dir: Option<PathBuf>,
    },

    /// Send one message to the agent and print the reply
    Ask {
        /// The message to send
        message: String,

        /// User id for log correlation
        #[arg(long, default_value = "cli")]
        user_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "atiende", "-vv", "serve", "--host", "127.0.0.1", "--port", "8080",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Some(Command::Serve {
                host: Some("127.0.0.1".to_string()),
                port: Some(8080),
                static_dir: None,
            })
        );
    }

    #[test]
    fn test_parse_ask() {
        let cli = Cli::try_parse_from(["atiende", "ask", "como renovar mi cedula", "--no-config"])
            .unwrap();

        assert!(cli.no_config);
        match cli.command {
            Some(Command::Ask { message, user_id }) => {
                assert_eq!(message, "como renovar mi cedula");
                assert_eq!(user_id, "cli");
            }
            other => panic!("Expected Ask, got {:?}", other),
        }
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = Cli::try_parse_from(["atiende", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
