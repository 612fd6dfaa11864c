use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// agentmap - An interactive Agent framework roadmap presenter
#[derive(Parser)]
#[command(name = "agentmap")]
#[command(about = "Present the Agent framework product roadmap in the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the roadmap document to stdout
    Show {
        /// Product version (basic, advanced, pro)
        #[arg(short, long, default_value = "basic")]
        version: String,

        /// Target audience (developer, business, leader)
        #[arg(short, long, default_value = "developer")]
        audience: String,

        /// Display language (zh, en)
        #[arg(short, long, default_value = "zh")]
        lang: String,

        /// Load the selection from a saved session file instead
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the feature-comparison matrix
    Matrix {
        /// Display language (zh, en)
        #[arg(short, long, default_value = "zh")]
        lang: String,
    },
    /// Render the roadmap document and export it as a Markdown file
    Export {
        /// Product version (basic, advanced, pro)
        #[arg(short, long, default_value = "basic")]
        version: String,

        /// Target audience (developer, business, leader)
        #[arg(short, long, default_value = "developer")]
        audience: String,

        /// Display language (zh, en)
        #[arg(short, long, default_value = "zh")]
        lang: String,

        /// Directory to write the export file into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let result = Cli::try_parse_from(["agentmap"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_show_with_selection() {
        let result = Cli::try_parse_from([
            "agentmap", "show", "--version", "pro", "--audience", "leader", "--lang", "zh",
        ]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Show {
                version,
                audience,
                lang,
                config,
            }) => {
                assert_eq!(version, "pro");
                assert_eq!(audience, "leader");
                assert_eq!(lang, "zh");
                assert!(config.is_none());
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_show_defaults() {
        let result = Cli::try_parse_from(["agentmap", "show"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Show {
                version,
                audience,
                lang,
                ..
            }) => {
                assert_eq!(version, "basic");
                assert_eq!(audience, "developer");
                assert_eq!(lang, "zh");
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_show_with_config() {
        let result =
            Cli::try_parse_from(["agentmap", "show", "--config", "/path/to/session.json"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Show { config, .. }) => {
                assert_eq!(config.unwrap().to_str().unwrap(), "/path/to/session.json");
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_matrix_command() {
        let result = Cli::try_parse_from(["agentmap", "matrix", "--lang", "en"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Matrix { lang }) => assert_eq!(lang, "en"),
            _ => panic!("Expected Matrix command"),
        }
    }

    #[test]
    fn test_cli_export_command() {
        let result = Cli::try_parse_from([
            "agentmap", "export", "--version", "advanced", "--out", "/tmp/exports",
        ]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Export { version, out, .. }) => {
                assert_eq!(version, "advanced");
                assert_eq!(out.to_str().unwrap(), "/tmp/exports");
            }
            _ => panic!("Expected Export command"),
        }
    }
}
