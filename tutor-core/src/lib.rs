// Wire models are always available
pub mod models;

// Server-only modules
#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod http;

// Re-export commonly used types
pub use models::{AskRequest, AskResponse, NO_RESPONSE};

#[cfg(feature = "server")]
pub use config::Config;
