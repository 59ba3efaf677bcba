use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::form::TokenConfig;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Starting configuration of the shared form.
    pub initial: TokenConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TokenConfig::default();
        let addr = lookup("TOKENGEN_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .with_context(|| format!("TOKENGEN_ADDR is not a socket address: {addr}"))?;

        let initial = TokenConfig {
            length: parse_var(&lookup, "TOKENGEN_LENGTH", defaults.length)?,
            numbers: parse_var(&lookup, "TOKENGEN_NUMBERS", defaults.numbers)?,
            symbols: parse_var(&lookup, "TOKENGEN_SYMBOLS", defaults.symbols)?,
            count: parse_var(&lookup, "TOKENGEN_COUNT", defaults.count)?,
        };
        initial
            .validate()
            .context("invalid initial form configuration")?;

        Ok(Self { addr, initial })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}
