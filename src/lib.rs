//! SELECT Chat: a CVD risk assessment chatbot
//!
//! Messages are sent to Google Gemini for free-text analysis and run through
//! a keyword-driven SELECT I risk classifier. The chat page, JSON API and
//! health check are served by axum.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod routes;
pub mod session;
pub mod state;

use std::sync::Arc;

use adapters::services::llm::GoogleService;
use config::AppConfig;
use error::Result;
use session::ChatService;
use state::AppState;

/// Initialize the application
///
/// Builds the model client and the in-memory session state.
pub fn initialize_app(config: &AppConfig) -> Result<AppState> {
    let llm = GoogleService::with_base_url(
        config.api_key.clone(),
        config.api_base.clone(),
        config.llm_timeout_secs,
    )?;

    let chat = ChatService::new(Arc::new(llm), config.llm.clone());
    Ok(AppState::new(chat))
}
