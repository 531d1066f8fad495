//! Application state and shared resources.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::sms::SmsSender;
use crate::token::TokenStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// In-memory token store, lives for the process lifetime
    pub store: Arc<TokenStore>,

    /// Outbound SMS capability
    pub sms: Arc<dyn SmsSender>,
}

impl AppState {
    /// Create new application state with an empty token store
    pub fn new(config: AppConfig, sms: Arc<dyn SmsSender>) -> Self {
        Self {
            config,
            store: Arc::new(TokenStore::new()),
            sms,
        }
    }
}
