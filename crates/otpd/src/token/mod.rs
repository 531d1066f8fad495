//! Token generation and storage.

mod generator;
mod store;

pub use generator::generate_token;
pub use store::TokenStore;

use chrono::{DateTime, Utc};

/// Record held in the store for an issued, not-yet-consumed token
#[derive(Debug, Clone)]
pub struct TokenRecord {
    /// Normalized phone number the token was issued for
    pub phone_number: String,
    /// Timestamp of the last write for this key
    pub last_updated: DateTime<Utc>,
    /// Uppercased copy of the store key
    pub token: String,
}
