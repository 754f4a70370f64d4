//! Runtime configuration, read from the environment at startup.

use std::net::SocketAddr;

use anyhow::Context;

pub const BIND_ADDR_VAR: &str = "TALLY_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{BIND_ADDR_VAR}={raw:?} is not a socket address"))?,
            None => {
                tracing::info!("{BIND_ADDR_VAR} not set; using {DEFAULT_BIND_ADDR}");
                DEFAULT_BIND_ADDR.parse()?
            }
        };

        Ok(Self { bind_addr })
    }
}
