pub mod colors;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config::AppConfig, dao::score_store::ScoreStore};

use self::colors::ColorRegistry;

pub type SharedState = Arc<AppState>;

/// Central application state: the score store handle, the team color registry and the configuration.
pub struct AppState {
    store: Arc<dyn ScoreStore>,
    colors: Mutex<ColorRegistry>,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The color registry starts empty; teams get colors as requests reveal them.
    pub fn new(store: Arc<dyn ScoreStore>, config: AppConfig) -> SharedState {
        Arc::new(Self {
            store,
            colors: Mutex::new(ColorRegistry::new()),
            config,
        })
    }

    /// Handle to the score store.
    pub fn store(&self) -> &Arc<dyn ScoreStore> {
        &self.store
    }

    /// Registry of team colors. Every read-check-assign must happen under this lock.
    pub fn colors(&self) -> &Mutex<ColorRegistry> {
        &self.colors
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
