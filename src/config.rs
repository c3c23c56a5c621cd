// src/config.rs

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_MCP_PATH: &str = "/mcp";

/// How the server talks to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Streamable HTTP on `Config::bind`.
    Http,
    /// JSON-RPC over stdin/stdout.
    Stdio,
}

/// Startup configuration. Every field falls back to the fixed default when
/// its variable is unset, so an empty environment serves on port 8000.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub mcp_path: String,
    pub assets_dir: PathBuf,
    pub transport: Transport,
}

impl Config {
    /// Reads the process environment, after merging an optional `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("KITCHEN_SINK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            key: "KITCHEN_SINK_BIND",
            value: bind_raw.clone(),
            reason: e.to_string(),
        })?;

        let mcp_path = lookup("KITCHEN_SINK_MCP_PATH").unwrap_or_else(|| DEFAULT_MCP_PATH.to_string());
        if !mcp_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                key: "KITCHEN_SINK_MCP_PATH",
                value: mcp_path,
                reason: "route must start with '/'".into(),
            });
        }

        let assets_dir = lookup("KITCHEN_SINK_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_assets_dir);

        let transport = match lookup("KITCHEN_SINK_TRANSPORT").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("http") => Transport::Http,
            Some("stdio") => Transport::Stdio,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "KITCHEN_SINK_TRANSPORT",
                    value: other.to_string(),
                    reason: "expected `http` or `stdio`".into(),
                });
            }
        };

        Ok(Self { bind, mcp_path, assets_dir, transport })
    }
}

/// `assets/` next to the crate manifest, where the widget build drops its output.
pub fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}
