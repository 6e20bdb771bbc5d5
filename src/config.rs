use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

use crate::recipes::query::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
    pub page_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub expiry_window_days: u32,
    pub catalog: CatalogConfig,
}

pub const DEFAULT_EXPIRY_WINDOW_DAYS: u32 = 7;

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = std::env::var("APP_PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse::<u16>()
            .context("APP_PORT must be a port number")?;
        let catalog = CatalogConfig {
            path: std::env::var("CATALOG_PATH").ok().map(PathBuf::from),
            page_size: parse_page_size(std::env::var("CATALOG_PAGE_SIZE").ok())?,
        };
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            expiry_window_days: std::env::var("EXPIRY_WINDOW_DAYS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(DEFAULT_EXPIRY_WINDOW_DAYS),
            catalog,
        })
    }
}

/// Unset means the default; anything else must be a positive integer.
fn parse_page_size(raw: Option<String>) -> anyhow::Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PAGE_SIZE);
    };
    let size = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("CATALOG_PAGE_SIZE must be a positive integer, got {raw:?}"))?;
    anyhow::ensure!(size > 0, "CATALOG_PAGE_SIZE must be a positive integer, got 0");
    Ok(size)
}
