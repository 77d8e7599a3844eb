//! Tutor backend client
//!
//! Two independent calls against the external backend: [`ask`] for the
//! question form and [`send_message`] for raw chat payloads. They share
//! one pooled HTTP client but have no dependency on each other.

use crate::config::Config;
use crate::http::get_client;
use crate::models::{AskRequest, AskResponse};
use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Instant;
use tracing::{info, warn};

/// Send a question to the tutor backend (`POST /ask`)
///
/// The request body is the JSON-serialized [`AskRequest`]; the response
/// body is parsed into [`AskResponse`], tolerating any extra fields.
pub async fn ask(request: &AskRequest, config: &Config) -> Result<AskResponse> {
    let client = get_client();
    let start = Instant::now();

    let response = client
        .post(config.ask_url())
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await
        .context("Failed to send request to tutor backend")?;

    let duration_ms = start.elapsed().as_millis();

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        warn!(
            status = %status,
            duration_ms = %duration_ms,
            "Ask request failed"
        );
        anyhow::bail!("Tutor backend error {}: {}", status, text);
    }

    let answer: AskResponse = response
        .json()
        .await
        .context("Failed to parse tutor backend response")?;

    info!(
        subject = %request.subject,
        duration_ms = %duration_ms,
        "Ask completed"
    );

    Ok(answer)
}

/// Send an arbitrary JSON payload to the chat endpoint (`POST /api/chat`)
///
/// Returns the parsed JSON body verbatim on 2xx. A non-2xx status fails
/// before the body is read; no shape is enforced in either direction.
pub async fn send_message(payload: &Value, config: &Config) -> Result<Value> {
    let client = get_client();
    let start = Instant::now();

    let response = client
        .post(config.chat_url())
        .header("Content-Type", "application/json")
        .json(payload)
        .send()
        .await
        .context("Failed to send request to chat endpoint")?;

    let duration_ms = start.elapsed().as_millis();

    if !response.status().is_success() {
        let status = response.status();
        warn!(
            status = %status,
            duration_ms = %duration_ms,
            "Chat request failed"
        );
        anyhow::bail!("Backend error");
    }

    let body: Value = response
        .json()
        .await
        .context("Failed to parse chat endpoint response")?;

    info!(duration_ms = %duration_ms, "Chat message delivered");

    Ok(body)
}
