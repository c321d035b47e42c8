use std::sync::Arc;

use availability_engine::ResourceStore;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResourceStore>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ResourceStore>, config: ServerConfig) -> Self {
        Self { store, config }
    }
}
