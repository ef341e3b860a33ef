/// Domain models for SELECT Chat
///
/// These models represent core business entities and are transport-agnostic.
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One entry of the chat transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub created_at: i64, // Unix timestamp
}

impl ChatMessage {
    /// Creates a message authored by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text.into())
    }

    /// Creates a message authored by the bot
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text.into())
    }

    fn new(role: ChatRole, text: String) -> Self {
        Self {
            role,
            text,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Cardiovascular risk tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Risk factors picked out of a free-text message
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskFactors {
    pub history_of_stroke: bool,
    #[serde(rename = "history_of_MI")]
    pub history_of_mi: bool,
    pub hypertension: bool,
    pub diabetes: bool,
}

/// Outcome of running the classifier over one message
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub factors: RiskFactors,
    pub level: RiskLevel,
    pub advice: &'static str,
}

/// A JSON document uploaded for testing, kept exactly as received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedJson {
    pub file_name: Option<String>,
    pub raw: String,
    pub uploaded_at: i64,
}

impl UploadedJson {
    /// Creates a new upload record
    pub fn new(file_name: Option<String>, raw: String) -> Self {
        Self {
            file_name,
            raw,
            uploaded_at: chrono::Utc::now().timestamp(),
        }
    }
}
