//! Token issue and verify endpoints.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;

use super::pages;
use crate::phone;
use crate::state::AppState;
use crate::token::generate_token;

/// Serve the index page with the phone number form
pub async fn serve_index() -> Html<&'static str> {
    Html(pages::INDEX)
}

#[derive(Deserialize)]
pub struct RequestForm {
    phone: String,
}

/// Issue a token: normalize the phone number, generate, store, send SMS
pub async fn handle_request(
    State(state): State<AppState>,
    Form(form): Form<RequestForm>,
) -> Result<Html<&'static str>, StatusCode> {
    let phone_number = phone::normalize(&form.phone);
    let token = generate_token(state.config.token_length);

    // Stored before the send; delivery failure leaves the token pending
    state.store.add_token(&token, &phone_number).await;

    let to = format!("{}{}", state.config.country_code, phone_number);
    let text = format!("Your token is {token}");

    if let Err(e) = state.sms.send(&to, &state.config.from_number, &text).await {
        tracing::error!(phone = %phone_number, error = %e, "SMS delivery failed");
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    tracing::debug!(phone = %phone_number, "Token issued");

    Ok(Html(pages::VERIFY))
}

#[derive(Deserialize)]
pub struct VerifyForm {
    token: String,
}

/// Verify a token: consume it on success, re-render the form on failure
pub async fn handle_verify(
    State(state): State<AppState>,
    Form(form): Form<VerifyForm>,
) -> Result<Html<&'static str>, StatusCode> {
    if state.store.token_is_valid(&form.token).await {
        let record = state
            .store
            .clear_token(&form.token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

        tracing::info!(phone = %record.phone_number, "Token verified");
        Ok(Html(pages::VERIFY_SUCCESS))
    } else {
        // Unknown and already-consumed tokens are indistinguishable here
        tracing::debug!("Token verification failed");
        Ok(Html(pages::VERIFY_ERROR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::sms::testing::MockSender;
    use std::sync::Arc;

    fn test_state(sender: Arc<MockSender>) -> AppState {
        let config = AppConfig {
            token_length: 6,
            country_code: "+1".to_string(),
            from_number: "+15550009999".to_string(),
            ..AppConfig::default()
        };
        AppState::new(config, sender)
    }

    async fn issue(state: &AppState, phone: &str) -> Result<Html<&'static str>, StatusCode> {
        handle_request(
            State(state.clone()),
            Form(RequestForm {
                phone: phone.to_string(),
            }),
        )
        .await
    }

    async fn verify(state: &AppState, token: &str) -> Result<Html<&'static str>, StatusCode> {
        handle_verify(
            State(state.clone()),
            Form(VerifyForm {
                token: token.to_string(),
            }),
        )
        .await
    }

    #[tokio::test]
    async fn issue_stores_and_sends_token() {
        let sender = Arc::new(MockSender::new());
        let state = test_state(sender.clone());

        let page = issue(&state, "(212) 555-0100").await.unwrap();
        assert_eq!(page.0, pages::VERIFY);

        let sent = sender.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "+12125550100");
        assert_eq!(sent[0].from, "+15550009999");

        let token = sent[0].text.strip_prefix("Your token is ").unwrap();
        assert_eq!(token.len(), 6);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));

        let record = state.store.get(token).await.unwrap();
        assert_eq!(record.phone_number, "2125550100");
    }

    #[tokio::test]
    async fn verify_consumes_token_exactly_once() {
        let sender = Arc::new(MockSender::new());
        let state = test_state(sender.clone());

        issue(&state, "555-1234").await.unwrap();
        let token = {
            let sent = sender.sent.lock().await;
            sent[0].text.strip_prefix("Your token is ").unwrap().to_string()
        };

        let first = verify(&state, &token).await.unwrap();
        assert_eq!(first.0, pages::VERIFY_SUCCESS);

        let second = verify(&state, &token).await.unwrap();
        assert_eq!(second.0, pages::VERIFY_ERROR);
    }

    #[tokio::test]
    async fn verify_unknown_token_fails_without_side_effects() {
        let sender = Arc::new(MockSender::new());
        let state = test_state(sender);

        state.store.add_token("AB12CD", "5551234").await;

        let page = verify(&state, "FFFFFF").await.unwrap();
        assert_eq!(page.0, pages::VERIFY_ERROR);
        assert_eq!(state.store.len().await, 1);
    }

    #[tokio::test]
    async fn sms_failure_returns_500_but_keeps_token() {
        let sender = Arc::new(MockSender::failing());
        let state = test_state(sender);

        let result = issue(&state, "555-1234").await;
        assert_eq!(result.unwrap_err(), StatusCode::INTERNAL_SERVER_ERROR);

        // The store mutation happens before the send
        assert_eq!(state.store.len().await, 1);
    }

    #[tokio::test]
    async fn index_serves_phone_form() {
        let page = serve_index().await;
        assert!(page.0.contains("action=\"/request\""));
    }
}
