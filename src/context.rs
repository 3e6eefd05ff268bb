//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::DreamApi;
use crate::config::AppConfig;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// GraphQL data access
    api: StoredValue<Arc<dyn DreamApi>>,
    /// Runtime configuration
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(api: Arc<dyn DreamApi>, config: AppConfig) -> Self {
        Self {
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> Arc<dyn DreamApi> {
        self.api.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
