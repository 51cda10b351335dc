// src/config.rs
use std::env;

// Same placeholder defaults the bot backend ships with, so a blank
// environment runs but reports the tokens as not configured.
pub const PLACEHOLDER_PAGE_TOKEN: &str = "your-page-access-token";
pub const PLACEHOLDER_VERIFY_TOKEN: &str = "your-verify-token";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_BACKEND_API_URL: &str = "http://localhost:8000";
const DEFAULT_GRAPH_API_URL: &str = "https://graph.facebook.com/v23.0";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub page_access_token: String,
    pub verify_token: String,
    pub backend_api_url: String,
    pub graph_api_url: String,
}

impl Config {
    /// Read the configuration from the process environment.
    /// Missing values fall back to defaults; nothing here is fatal.
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            page_access_token: env::var("FB_PAGE_ACCESS_TOKEN")
                .unwrap_or_else(|_| PLACEHOLDER_PAGE_TOKEN.into()),
            verify_token: env::var("FB_VERIFY_TOKEN")
                .unwrap_or_else(|_| PLACEHOLDER_VERIFY_TOKEN.into()),
            backend_api_url: env::var("BACKEND_API_URL")
                .unwrap_or_else(|_| DEFAULT_BACKEND_API_URL.into()),
            graph_api_url: env::var("GRAPH_API_URL")
                .unwrap_or_else(|_| DEFAULT_GRAPH_API_URL.into()),
        }
    }

    pub fn page_token_configured(&self) -> bool {
        !self.page_access_token.is_empty() && self.page_access_token != PLACEHOLDER_PAGE_TOKEN
    }

    pub fn verify_token_configured(&self) -> bool {
        !self.verify_token.is_empty() && self.verify_token != PLACEHOLDER_VERIFY_TOKEN
    }
}
