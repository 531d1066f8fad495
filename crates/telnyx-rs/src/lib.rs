//! Minimal client for the Telnyx v2 Messages API.
//!
//! Covers exactly one call: sending an outbound SMS. Authentication is a
//! bearer token (the account API key).

pub mod models;

use reqwest::Client;
use serde_json::json;
use thiserror::Error;

use crate::models::MessageResponse;

const MESSAGES_URL: &str = "https://api.telnyx.com/v2/messages";

/// Errors returned by the Telnyx client.
#[derive(Debug, Error)]
pub enum TelnyxError {
    /// The HTTP request could not be sent or the connection failed.
    #[error("request to Telnyx failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Telnyx answered with a non-success status.
    #[error("Telnyx returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone)]
pub struct TelnyxOptions {
    pub api_key: String,
}

/// Telnyx messaging client.
#[derive(Debug, Clone)]
pub struct TelnyxClient {
    options: TelnyxOptions,
    http: Client,
}

impl TelnyxClient {
    pub fn new(options: TelnyxOptions) -> Self {
        Self {
            options,
            http: Client::new(),
        }
    }

    /// Send an outbound SMS.
    ///
    /// `to` and `from` are E.164 numbers; `text` is the message body.
    pub async fn send_message(
        &self,
        to: &str,
        from: &str,
        text: &str,
    ) -> Result<MessageResponse, TelnyxError> {
        let body = json!({
            "to": to,
            "from": from,
            "text": text,
        });

        let response = self
            .http
            .post(MESSAGES_URL)
            .bearer_auth(&self.options.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "Telnyx rejected message");
            return Err(TelnyxError::Api { status, body });
        }

        let message = response.json::<MessageResponse>().await?;
        tracing::debug!(message_id = %message.data.id, "Telnyx accepted message");

        Ok(message)
    }
}
