use anyhow::Result;

/// Default backend base URL when TUTOR_BACKEND_URL is not set
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
}

impl Config {
    /// Load configuration from the .env file and environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is absent

        let backend_url = std::env::var("TUTOR_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        Ok(Self { backend_url })
    }

    /// Build a config pointing at an explicit backend base URL
    #[must_use]
    pub fn with_backend_url(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
        }
    }

    /// Endpoint for tutor questions
    #[must_use]
    pub fn ask_url(&self) -> String {
        format!("{}/ask", self.backend_url.trim_end_matches('/'))
    }

    /// Endpoint for raw chat payloads
    #[must_use]
    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.backend_url.trim_end_matches('/'))
    }
}
