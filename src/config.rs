// src/config.rs
use std::env;
use crate::error::{Error, Result};

pub const DEFAULT_HOST: &str = "https://api.exaroton.com/v1";
pub const DEFAULT_PLAYER_LIST: &str = "whitelist";

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub host: String,

    // Used by the command line front end; the library takes ids per call.
    pub server_id: Option<String>,
    pub player_list: String,
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("host", &self.host)
            .field("server_id", &self.server_id)
            .field("player_list", &self.player_list)
            .finish()
    }
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            host: DEFAULT_HOST.to_string(),
            server_id: None,
            player_list: DEFAULT_PLAYER_LIST.to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let token = setting("EXAROTON_TOKEN").ok_or(Error::MissingSetting("EXAROTON_TOKEN"))?;

        Ok(Self {
            token,
            host: setting("EXAROTON_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_id: setting("EXAROTON_SERVER_ID"),
            player_list: setting("EXAROTON_PLAYER_LIST")
                .unwrap_or_else(|| DEFAULT_PLAYER_LIST.to_string()),
        })
    }

    pub fn require_server_id(&self) -> Result<&str> {
        self.server_id
            .as_deref()
            .ok_or(Error::MissingSetting("EXAROTON_SERVER_ID"))
    }
}

// Trimmed value of an environment variable; blank counts as unset.
fn setting(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
