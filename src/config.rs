// Configuration - Environment-driven settings shared by both front ends

use crate::content::Content;
use crate::error::{PortfolioError, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Relay that turns contact form posts into email
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/portfolio-contact";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// JSON content file; None means the compiled-in data set
    pub content_path: Option<PathBuf>,
    pub form_endpoint: String,
    /// Terminal mode logs here, never to the screen
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            content_path: None,
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Read PORTFOLIO_ADDR, PORTFOLIO_CONTENT, PORTFOLIO_FORM_ENDPOINT, PORTFOLIO_LOG_FILE
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with the variable source injected
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(addr) = non_empty("PORTFOLIO_ADDR") {
            config.addr = parse_addr(&addr)?;
        }
        config.content_path = non_empty("PORTFOLIO_CONTENT").map(PathBuf::from);
        if let Some(endpoint) = non_empty("PORTFOLIO_FORM_ENDPOINT") {
            config.form_endpoint = endpoint;
        }
        config.log_file = non_empty("PORTFOLIO_LOG_FILE").map(PathBuf::from);

        Ok(config)
    }

    /// Content from the configured file, or the canonical set
    pub fn load_content(&self) -> Result<Content> {
        match &self.content_path {
            Some(path) => Content::load(path),
            None => Ok(Content::canonical()),
        }
    }
}

pub fn parse_addr(addr: &str) -> Result<SocketAddr> {
    addr.trim()
        .parse()
        .map_err(|_| PortfolioError::InvalidAddress(addr.to_string()))
}
