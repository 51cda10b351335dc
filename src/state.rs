// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::backend::BackendClient;
use crate::services::graph::GraphClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub graph: GraphClient,
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            graph: GraphClient::new(
                http.clone(),
                config.graph_api_url.clone(),
                config.page_access_token.clone(),
            ),
            backend: BackendClient::new(http, config.backend_api_url.clone()),
            config,
        })
    }
}
