//! Response models for the Telnyx v2 Messages API.
//!
//! Only the fields the demo reads are modeled; the API returns many more.

use serde::Deserialize;

/// Envelope returned by `POST /v2/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub data: MessageData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageData {
    /// Telnyx message identifier.
    pub id: String,

    /// Record type, always `"message"`.
    #[serde(default)]
    pub record_type: Option<String>,

    /// Sender number as accepted by Telnyx.
    #[serde(default)]
    pub from: Option<serde_json::Value>,

    /// Message body as accepted by Telnyx.
    #[serde(default)]
    pub text: Option<String>,
}
