use anyhow::{Context, Result};

use crate::theme::ColorScheme;

pub const DEFAULT_DB_PATH: &str = "db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Where todos are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    Sled(String),
    // nothing survives a restart
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: Storage,
    pub bind_addr: String,
    pub color_scheme: ColorScheme,
}

impl Config {
    /// Reads `TODO_DB_PATH`, `TODO_BIND_ADDR` and `TODO_THEME`.
    /// `TODO_DB_PATH=:memory:` selects the in-memory store.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage = match lookup("TODO_DB_PATH") {
            Some(path) if path == ":memory:" => Storage::Memory,
            Some(path) if !path.trim().is_empty() => Storage::Sled(path),
            _ => Storage::Sled(DEFAULT_DB_PATH.to_string()),
        };
        let bind_addr = lookup("TODO_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let color_scheme = match lookup("TODO_THEME") {
            Some(value) => value.parse::<ColorScheme>().context("invalid TODO_THEME")?,
            None => ColorScheme::default(),
        };
        Ok(Self {
            storage,
            bind_addr,
            color_scheme,
        })
    }
}
