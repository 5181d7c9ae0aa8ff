//! CLI module for SoftSell
//!
//! Provides command-line interface parsing and handling for the softsell-server binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod init;
pub mod output;

use crate::utils::toml_config::ProviderKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SoftSell - Software License Resale Platform
///
/// Serves the SoftSell marketing site and answers its support chat widget.
#[derive(Parser, Debug)]
#[command(
    name = "softsell-server",
    author = "SoftSell <dev@softsell.com>",
    version,
    about = "SoftSell - Software License Resale Platform",
    long_about = "Serves the SoftSell marketing site and proxies its support chat widget\n\
                  to a hosted LLM so the API key stays on the server.\n\n\
                  Run without arguments to start the server, or use 'init' to scaffold a new project.",
    after_help = "EXAMPLES:\n    \
                  softsell-server init                     # Scaffold softsell.toml and .env.example\n    \
                  softsell-server init --provider openai   # Configure the OpenAI provider\n    \
                  softsell-server                          # Start the server (requires softsell.toml)\n    \
                  softsell-server --config my.toml         # Use a custom config file\n    \
                  softsell-server config --validate        # Check the configuration"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "softsell.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new SoftSell project with configuration files
    ///
    /// Creates softsell.toml, .env.example and a .gitignore.
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files without prompting
        #[arg(short, long)]
        force: bool,

        /// LLM provider to configure
        #[arg(long, value_enum, default_value_t = ProviderKind::Gemini)]
        provider: ProviderKind,

        /// Host address for the server
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the server
        #[arg(long, default_value = "3000")]
        port: u16,
    },

    /// Show configuration information
    Config {
        /// Show the full configuration
        #[arg(short = 'f', long)]
        full: bool,

        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_server() {
        let cli = Cli::try_parse_from(["softsell-server"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("softsell.toml"));
        assert!(!cli.json);
    }

    #[test]
    fn test_init_defaults() {
        let cli = Cli::try_parse_from(["softsell-server", "init"]).unwrap();
        match cli.command {
            Some(Commands::Init {
                path,
                force,
                provider,
                host,
                port,
            }) => {
                assert_eq!(path, PathBuf::from("."));
                assert!(!force);
                assert_eq!(provider, ProviderKind::Gemini);
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 3000);
            }
            other => panic!("Expected init command, got {:?}", other),
        }
    }

    #[test]
    fn test_init_parses_openai_provider() {
        let cli = Cli::try_parse_from(["softsell-server", "init", "--provider", "openai"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Init {
                provider: ProviderKind::OpenAI,
                ..
            })
        ));
    }

    #[test]
    fn test_init_rejects_unknown_provider() {
        assert!(Cli::try_parse_from(["softsell-server", "init", "--provider", "ollama"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["softsell-server", "config", "--validate", "-c", "other.toml"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                validate: true,
                full: false
            })
        ));
    }
}
