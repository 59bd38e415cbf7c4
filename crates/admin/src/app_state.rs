//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::RestClient;
use crate::config::AdminConfig;
use crate::controller::AdminController;
use crate::notifications::Notifications;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    controller: AdminController<RestClient>,
}

impl AppState {
    /// Build the backend client and controller described by `config`.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let client = RestClient::new(config.api_url.clone(), config.api_session.clone());
        let controller = AdminController::new(client, Notifications::new(config.notification_ttl));
        Self {
            inner: Arc::new(AppStateInner { config, controller }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn controller(&self) -> &AdminController<RestClient> {
        &self.inner.controller
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
