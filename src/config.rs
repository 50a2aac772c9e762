//! Service configuration.
//!
//! Loaded once at startup from (in order of precedence):
//! 1. Environment variables (`ENV`, `STORAGE_PATH`, `HTTP_SERVER_HOST`, `HTTP_SERVER_PORT`)
//! 2. The YAML file named by `CONFIG_PATH`, or by `--config` when that is unset
//!
//! `env` and `storage_path` are required; the server address has defaults.

use crate::error::ConfigError;
use clap::Parser;
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpServer {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8082
}

impl Default for HttpServer {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub env: String,
    pub storage_path: PathBuf,
    #[serde(default)]
    pub http_server: HttpServer,
}

/// Command-line arguments for the server binary.
#[derive(Debug, Parser)]
#[command(name = "student-api", version, about = "Student records REST service")]
pub struct Args {
    /// Path to the YAML configuration file. `CONFIG_PATH` takes precedence when set.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Environment variable naming the config file; checked before `--config`.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// `CONFIG_PATH` if set and non-empty, else the `--config` flag.
pub fn config_path(args: &Args) -> Option<PathBuf> {
    std::env::var_os(CONFIG_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| args.config.clone())
}

impl Config {
    /// Resolve the config path (environment first, then `args`) and load it.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let path = config_path(args).ok_or(ConfigError::MissingPath)?;
        Self::from_file(&path)
    }

    /// Load from a YAML file, with environment variables layered on top.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        Self::figment(path)
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::raw().only(&["ENV", "STORAGE_PATH"]))
            .merge(Env::prefixed("HTTP_SERVER_").map(|k| format!("http_server.{}", k).into()))
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.http_server.host, self.http_server.port)
    }
}
