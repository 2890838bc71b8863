use std::{fs::File, io::ErrorKind, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
    pub listen_port: u16,
    pub log_level: String,

    /// `"*"` anywhere in the list allows every origin
    pub cors_allow_origins: Vec<String>,
    pub payload_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1".to_string(),
            listen_port: 8000,
            log_level: "info".to_string(),
            cors_allow_origins: vec!["*".to_string()],
            payload_limit: 4096,
        }
    }
}

impl Config {
    /// `Ok(None)` when the file doesn't exist, so the caller can fall back to
    /// the defaults once logging is up.
    pub fn parse_from_file(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("Couldn't open config file {}", path.display())),
        };
        let config = serde_yaml::from_reader(file)
            .with_context(|| format!("Couldn't parse config file {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow_origins.iter().any(|o| o == "*")
    }
}
