//! In-memory session state: chat transcript and uploaded test data
//!
//! Nothing here is persisted; it all resets when the process restarts.
pub mod chat;
pub mod upload;

pub use chat::{ChatService, ChatTurn};
pub use upload::UploadStore;
