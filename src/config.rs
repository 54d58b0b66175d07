use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Name of the optional configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration for the kanban server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL for the database connection
    pub database_url: String,
    /// Interface to listen on
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory for rolling JSON log files; stdout only when unset
    pub log_dir: Option<PathBuf>,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

/// Command line arguments for the server
#[derive(Parser, Debug, Default)]
#[clap(name = "kanban-server", about = "A kanban board backend")]
pub struct CliArgs {
    /// Database URL
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Interface to listen on
    #[clap(long, env = "KANBAN_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[clap(long, env = "KANBAN_PORT")]
    pub port: Option<u16>,

    /// Directory for rolling log files
    #[clap(long, env = "KANBAN_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Explicit config file, instead of the one in the user config directory
    #[clap(long, env = "KANBAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug mode
    #[clap(long, env = "KANBAN_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            database_url: update.database_url.unwrap_or(self.database_url),
            host: update.host.unwrap_or(self.host),
            port: update.port.unwrap_or(self.port),
            log_dir: update.log_dir.or(self.log_dir),
        }
    }

    /// Parses `host:port` into a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

/// Returns the base (default) configuration
///
/// With a config directory, the database lives next to the config file.
pub fn base_config(config_dir: Option<PathBuf>) -> Config {
    let database_url = config_dir.map_or("kanban.db".to_string(), |path| path.join("kanban.db").to_string_lossy().to_string());

    Config {
        database_url,
        host: "127.0.0.1".to_string(),
        port: 8000,
        log_dir: None,
    }
}

/// Loads configuration from a TOML file
///
/// A missing path or a missing file yields an empty update.
///
/// ### Errors
///
/// Returns an error if the file exists but cannot be read or parsed
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file {:?}", config_path))?;
    let update = toml::from_str::<ConfigUpdate>(&content)
        .with_context(|| format!("Failed to parse config file {:?}", config_path))?;

    info!("Loaded configuration from {:?}", config_path);
    Ok(update)
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: &CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        database_url: args.database_url.clone(),
        host: args.host.clone(),
        port: args.port,
        log_dir: args.log_dir.clone(),
    }
}

/// Locates the per-user config directory, if it exists
pub fn default_config_dir() -> Option<PathBuf> {
    let Some(proj_dirs) = ProjectDirs::from("com", "kanban", "kanban") else {
        warn!("Could not determine XDG config directory, skipping config file");
        return None;
    };

    let path = proj_dirs.config_dir().to_path_buf();
    if path.exists() {
        Some(path)
    } else {
        info!("Config path not found at {:?}, using defaults", path);
        None
    }
}

/// Gets the complete configuration by combining defaults with
/// values from the config file, environment variables and command line
/// arguments, in order of increasing precedence
///
/// ### Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
/// A bad file is never skipped in favour of the defaults.
pub fn get_config(args: &CliArgs) -> Result<Config> {
    let config_dir = default_config_dir();
    let config_file = args
        .config
        .clone()
        .or_else(|| config_dir.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME)));

    let file_update = config_from_file(config_file)?;

    let config = base_config(config_dir)
        .apply_update(file_update)
        .apply_update(config_from_args(args));

    info!(
        "Final configuration: database_url={}, listen={}:{}, log_dir={:?}",
        config.database_url, config.host, config.port, config.log_dir
    );

    Ok(config)
}


#[cfg(test)]
mod prop_tests;
