//! Command-line interface for the user service.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// User Service - in-memory user management over HTTP
#[derive(Debug, Parser)]
#[command(name = "user-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this TOML file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Listen on this port, overriding config and PORT
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Write a default config.toml to the current directory
    Init,

    /// Load, validate and print the effective configuration
    CheckConfig,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Serve { port: None })
    }

    /// Loads configuration and applies command-line overrides last.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_with_path(path)?,
            None => Config::load()?,
        };

        if let Commands::Serve { port: Some(port) } = self.command() {
            config.server.port = port;
        }

        Ok(config)
    }
}
