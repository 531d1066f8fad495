//! Outbound SMS seam.
//!
//! The service only needs one capability from the provider: send a text to
//! a number. The trait keeps handlers testable without network access.

use async_trait::async_trait;

use crate::error::OtpdError;
use telnyx::{TelnyxClient, TelnyxOptions};

/// An SMS-sending capability
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send `text` to `to` from the sender identity `from`.
    async fn send(&self, to: &str, from: &str, text: &str) -> Result<(), OtpdError>;
}

/// Telnyx-backed sender used in production
pub struct TelnyxSender {
    client: TelnyxClient,
}

impl TelnyxSender {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: TelnyxClient::new(TelnyxOptions {
                api_key: api_key.to_string(),
            }),
        }
    }
}

#[async_trait]
impl SmsSender for TelnyxSender {
    async fn send(&self, to: &str, from: &str, text: &str) -> Result<(), OtpdError> {
        self.client
            .send_message(to, from, text)
            .await
            .map(|_| ())
            .map_err(|e| OtpdError::Sms(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording mock sender for handler tests.

    use super::*;
    use tokio::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SentMessage {
        pub to: String,
        pub from: String,
        pub text: String,
    }

    /// Records every send; optionally fails each call.
    #[derive(Default)]
    pub struct MockSender {
        pub sent: Mutex<Vec<SentMessage>>,
        pub fail: bool,
    }

    impl MockSender {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl SmsSender for MockSender {
        async fn send(&self, to: &str, from: &str, text: &str) -> Result<(), OtpdError> {
            if self.fail {
                return Err(OtpdError::Sms("provider unavailable".to_string()));
            }
            self.sent.lock().await.push(SentMessage {
                to: to.to_string(),
                from: from.to_string(),
                text: text.to_string(),
            });
            Ok(())
        }
    }
}
