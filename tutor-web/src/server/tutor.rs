use anyhow::Result;
use tutor_core::{AskRequest, AskResponse};

/// Send a question to the tutor backend
///
/// Thin wrapper for the web layer, delegates to tutor_core with the
/// cached server config.
pub async fn ask(request: &AskRequest) -> Result<AskResponse> {
    let config = super::config::get()?;
    tutor_core::client::ask(request, config).await
}
