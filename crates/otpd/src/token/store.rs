//! In-memory token store.

use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::TokenRecord;
use crate::error::OtpdError;

/// Process-wide mapping from issued token to its record.
///
/// Keys are always stored uppercased and every lookup uppercases its input,
/// so validity checks are case-insensitive. A key being present means the
/// token has been issued and not yet consumed. Nothing expires: a record
/// lives until it is cleared by a successful verification, or forever.
pub struct TokenStore {
    tokens: RwLock<HashMap<String, TokenRecord>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a record for `token`, stamped with the current time.
    ///
    /// Unconditional write: generating the same token twice silently
    /// overwrites the earlier record.
    pub async fn add_token(&self, token: &str, phone_number: &str) {
        let key = token.to_uppercase();
        let record = TokenRecord {
            phone_number: phone_number.to_string(),
            last_updated: Utc::now(),
            token: key.clone(),
        };

        self.tokens.write().await.insert(key, record);
    }

    /// Whether `token` has been issued and not yet consumed.
    pub async fn token_is_valid(&self, token: &str) -> bool {
        self.tokens.read().await.contains_key(&token.to_uppercase())
    }

    /// Remove and return the record for `token`.
    ///
    /// Clearing an absent token is a hard error; callers are expected to
    /// check validity first.
    pub async fn clear_token(&self, token: &str) -> Result<TokenRecord, OtpdError> {
        let key = token.to_uppercase();
        self.tokens
            .write()
            .await
            .remove(&key)
            .ok_or(OtpdError::TokenNotFound(key))
    }

    /// Look up the record for `token`, if any.
    pub async fn get(&self, token: &str) -> Option<TokenRecord> {
        self.tokens.read().await.get(&token.to_uppercase()).cloned()
    }

    /// Number of pending tokens.
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether no tokens are pending.
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
