use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{GazetteError, Result};
use crate::client::http::HttpContentApi;
use crate::client::ContentApi;
use crate::config::Config;

pub struct AppContext {
    pub config: Config,
    pub api: Arc<dyn ContentApi + Send + Sync>,
}

impl AppContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(&path),
            None => Config::load(),
        }
        .map_err(|e| GazetteError::Config(e.to_string()))?;

        let api: Arc<dyn ContentApi + Send + Sync> = Arc::new(HttpContentApi::new(&config.api)?);

        Ok(Self { config, api })
    }

    /// Wire a context around an existing client, e.g. a test double.
    pub fn with_api(config: Config, api: Arc<dyn ContentApi + Send + Sync>) -> Self {
        Self { config, api }
    }
}
