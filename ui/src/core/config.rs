//! Shell configuration.
//!
//! Defaults match the routes every platform crate declares. A platform may
//! override individual fields from JSON; missing fields keep their default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Route name of the landing view the floating button returns to.
    pub default_route: String,
    /// Path the auth-required redirect sends users to.
    pub login_path: String,
    /// Paths on which an auth-required signal is ignored.
    pub auth_paths: Vec<String>,
    /// Query key carrying the path to return to after login.
    pub redirect_param: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_route: "digest".to_string(),
            login_path: "/login".to_string(),
            auth_paths: vec!["/login".to_string(), "/register".to_string()],
            redirect_param: "redirect".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid shell configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn is_auth_path(&self, path: &str) -> bool {
        self.auth_paths.iter().any(|p| p == path)
    }
}
