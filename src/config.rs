use anyhow::{Context, Result};
use reqwest::Url;

pub const SERVER_URL_VAR: &str = "ENROLL_SERVER_URL";
const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Client configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Base URL of the activities server.
    pub server_url: Url,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            server_url: Url::parse(DEFAULT_SERVER_URL).expect("default server url is valid"),
        }
    }
}

impl BoardConfig {
    /// Load configuration, falling back to the localhost default when the
    /// environment variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(SERVER_URL_VAR) {
            Ok(raw) => {
                let server_url = Url::parse(&raw)
                    .with_context(|| format!("{SERVER_URL_VAR} is not a valid URL: {raw}"))?;
                Ok(Self { server_url })
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = BoardConfig::default();
        assert_eq!(config.server_url.as_str(), "http://localhost:8000/");
    }
}
