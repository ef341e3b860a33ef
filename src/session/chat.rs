//! Chat session: transcript plus the per-message analysis pipeline

use crate::domain::models::{ChatMessage, RiskFactors, RiskLevel};
use crate::domain::{risk, PromptTemplates};
use crate::error::{AppError, Result};
use crate::ports::llm::{LlmConfig, LlmServicePort};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Everything produced by one user message
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub risk_level: RiskLevel,
    pub advice: &'static str,
    pub factors: RiskFactors,
    /// Model output, absent when the model call failed
    pub analysis: Option<String>,
    pub analysis_error: Option<String>,
    /// Messages appended to the transcript by this turn, in order
    pub messages: Vec<ChatMessage>,
}

/// Append-only chat transcript and the model used to analyse messages
pub struct ChatService {
    llm: Arc<dyn LlmServicePort>,
    config: LlmConfig,
    history: RwLock<Vec<ChatMessage>>,
}

impl ChatService {
    pub fn new(llm: Arc<dyn LlmServicePort>, config: LlmConfig) -> Self {
        Self {
            llm,
            config,
            history: RwLock::new(Vec::new()),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.llm.provider_name()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Handle one user message.
    ///
    /// A failed model call is recorded in the transcript instead of aborting
    /// the turn; the keyword classifier runs either way.
    pub async fn send_message(&self, text: &str) -> Result<ChatTurn> {
        if text.is_empty() {
            return Err(AppError::InvalidInput("Message must not be empty".to_string()));
        }

        let prompt = PromptTemplates::render(PromptTemplates::risk_analysis(), text);
        let (analysis, analysis_error, reply) = match self.llm.generate(&prompt, &self.config).await {
            Ok(content) => {
                let reply = ChatMessage::assistant(content.clone());
                (Some(content), None, reply)
            }
            Err(e) => {
                log::warn!("{} analysis failed: {}", self.llm.provider_name(), e);
                let error = e.to_string();
                let reply = ChatMessage::assistant(format!("Analysis unavailable: {}", error));
                (None, Some(error), reply)
            }
        };

        let assessment = risk::assess(text);
        log::info!(
            "Processed message of {} characters, risk level {}",
            text.chars().count(),
            assessment.level
        );

        let mut messages = vec![ChatMessage::user(text), reply];
        messages.push(ChatMessage::assistant(format!(
            "Risk Level: {}",
            assessment.level
        )));
        messages.push(ChatMessage::assistant(format!(
            "Advice: {}",
            assessment.advice
        )));

        // Appended under one lock so concurrent turns never interleave
        self.history.write().await.extend(messages.iter().cloned());

        Ok(ChatTurn {
            risk_level: assessment.level,
            advice: assessment.advice,
            factors: assessment.factors,
            analysis,
            analysis_error,
            messages,
        })
    }

    /// Snapshot of the transcript in insertion order
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.history.read().await.clone()
    }

    pub async fn clear(&self) {
        self.history.write().await.clear();
        log::info!("Chat history cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ChatRole;
    use crate::ports::MockLlmServicePort;
    use mockall::predicate::eq;
    use tokio_test::assert_ok;

    fn service_with(mock: MockLlmServicePort) -> ChatService {
        ChatService::new(Arc::new(mock), LlmConfig::default())
    }

    #[tokio::test]
    async fn test_send_message_appends_four_messages() {
        let mut mock = MockLlmServicePort::new();
        mock.expect_generate()
            .with(
                eq("Analyze the following message for CVD risk factors: I have high blood pressure"),
                eq(LlmConfig::default()),
            )
            .times(1)
            .returning(|_, _| Ok("Hypertension is a major risk factor.".to_string()));
        mock.expect_provider_name().return_const("google");

        let service = service_with(mock);
        let turn = assert_ok!(service.send_message("I have high blood pressure").await);

        assert_eq!(turn.risk_level, RiskLevel::Medium);
        assert_eq!(turn.analysis.as_deref(), Some("Hypertension is a major risk factor."));
        assert!(turn.analysis_error.is_none());

        let history = service.history().await;
        let texts: Vec<_> = history.iter().map(|m| (m.role, m.text.as_str())).collect();
        assert_eq!(
            texts,
            vec![
                (ChatRole::User, "I have high blood pressure"),
                (ChatRole::Assistant, "Hypertension is a major risk factor."),
                (ChatRole::Assistant, "Risk Level: Medium"),
                (
                    ChatRole::Assistant,
                    "Advice: You are at moderate risk. Consider lifestyle changes such as reducing salt intake, exercising regularly, and quitting smoking."
                ),
            ]
        );
        assert_eq!(turn.messages, history);
    }

    #[tokio::test]
    async fn test_model_failure_still_classifies() {
        let mut mock = MockLlmServicePort::new();
        mock.expect_generate()
            .returning(|_, _| Err(AppError::RateLimited("quota".to_string())));
        mock.expect_provider_name().return_const("google");

        let service = service_with(mock);
        let turn = service.send_message("I had a stroke").await.unwrap();

        assert_eq!(turn.risk_level, RiskLevel::High);
        assert!(turn.analysis.is_none());
        assert_eq!(
            turn.messages[1].text,
            "Analysis unavailable: LLM service rate limit exceeded: quota"
        );
        assert_eq!(turn.messages[2].text, "Risk Level: High");
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let mut mock = MockLlmServicePort::new();
        mock.expect_generate().never();

        let service = service_with(mock);
        assert!(matches!(
            service.send_message("").await,
            Err(AppError::InvalidInput(_))
        ));
        assert!(service.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_message_is_classified() {
        let mut mock = MockLlmServicePort::new();
        mock.expect_generate()
            .with(
                eq("Analyze the following message for CVD risk factors:    "),
                eq(LlmConfig::default()),
            )
            .times(1)
            .returning(|_, _| Ok("No risk factors mentioned.".to_string()));
        mock.expect_provider_name().return_const("google");

        let service = service_with(mock);
        let turn = service.send_message("   ").await.unwrap();

        assert_eq!(turn.risk_level, RiskLevel::Low);
        assert_eq!(turn.messages[0].text, "   ");
        assert_eq!(service.history().await.len(), 4);
    }

    #[tokio::test]
    async fn test_history_preserves_order_and_clears() {
        let mut mock = MockLlmServicePort::new();
        mock.expect_generate()
            .times(2)
            .returning(|prompt, _| Ok(format!("echo {}", prompt.len())));
        mock.expect_provider_name().return_const("google");

        let service = service_with(mock);
        service.send_message("first").await.unwrap();
        service.send_message("second").await.unwrap();

        let history = service.history().await;
        assert_eq!(history.len(), 8);
        assert_eq!(history[0].text, "first");
        assert_eq!(history[4].text, "second");
        assert_eq!(history[6].text, "Risk Level: Low");

        service.clear().await;
        assert!(service.history().await.is_empty());
    }
}
