//! Application state for the web layer.

use std::sync::Arc;

use crate::map::MapConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Defaults for every rendered map
    pub map_config: Arc<MapConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(map_config: MapConfig) -> Self {
        Self {
            map_config: Arc::new(map_config),
        }
    }
}
