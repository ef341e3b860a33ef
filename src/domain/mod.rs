/// Domain layer - core business models
///
/// These models are transport-agnostic and represent core business entities.
pub mod models;
pub mod prompts;
pub mod risk;

pub use models::{
    ChatMessage, ChatRole, RiskAssessment, RiskFactors, RiskLevel, UploadedJson,
};
pub use prompts::PromptTemplates;
