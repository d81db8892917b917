//! CLI module for the graph-model-cli binary

pub mod catalog;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;

use crate::config::GraphModelConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "graph-model-cli")]
#[command(about = "Decode, inspect and re-encode Microsoft Graph payloads")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Indent JSON output (overrides the config file)
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a payload and print the resolved type and re-encoded JSON
    Decode {
        /// Type name, e.g. `entity` or `searchRequest`
        #[arg(long = "type")]
        type_name: String,
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },
    /// List the wire keys a type decodes, inherited ones included
    Fields {
        #[arg(long = "type")]
        type_name: String,
    },
    /// Decode then encode a payload and report any difference
    Roundtrip {
        #[arg(long = "type")]
        type_name: String,
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },
    /// List supported type names
    Types,
}

impl Cli {
    /// Configuration from `--config`, or defaults, with flag overrides applied
    pub fn load_config(&self) -> Result<GraphModelConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => GraphModelConfig::load(path)?,
            None => GraphModelConfig::default(),
        };
        if self.pretty {
            config.pretty_print = true;
        }
        Ok(config)
    }
}

/// Dispatch a parsed command line
pub fn run(command: &Commands, config: &GraphModelConfig) -> Result<(), CliError> {
    match command {
        Commands::Decode { type_name, input } => {
            commands::handle_decode(type_name, input, config)
        }
        Commands::Fields { type_name } => commands::handle_fields(type_name),
        Commands::Roundtrip { type_name, input } => {
            commands::handle_roundtrip(type_name, input, config)
        }
        Commands::Types => commands::handle_types(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decode_arguments() {
        let cli = Cli::parse_from(["graph-model-cli", "--pretty", "decode", "--type", "entity", "in.json"]);
        assert!(cli.pretty);
        match cli.command {
            Commands::Decode { type_name, input } => {
                assert_eq!(type_name, "entity");
                assert_eq!(input, "in.json");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_input_defaults_to_stdin() {
        let cli = Cli::parse_from(["graph-model-cli", "roundtrip", "--type", "searchRequest"]);
        assert!(matches!(cli.command, Commands::Roundtrip { ref input, .. } if input == "-"));
    }

    #[test]
    fn test_load_config_applies_flag() {
        let cli = Cli::parse_from(["graph-model-cli", "--pretty", "types"]);
        let config = cli.load_config().unwrap();
        assert!(config.pretty_print);
    }
}
