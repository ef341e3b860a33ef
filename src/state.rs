use std::sync::Arc;

use crate::session::{ChatService, UploadStore};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Chat transcript and model access.
    pub chat: Arc<ChatService>,
    /// Last uploaded JSON test document.
    pub uploads: Arc<UploadStore>,
}

impl AppState {
    pub fn new(chat: ChatService) -> Self {
        Self {
            chat: Arc::new(chat),
            uploads: Arc::new(UploadStore::new()),
        }
    }
}
