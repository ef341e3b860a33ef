//! Runtime configuration loaded from environment variables

use crate::adapters::services::llm::google::GOOGLE_API_BASE;
use crate::error::{AppError, Result};
use crate::ports::llm::LlmConfig;
use std::str::FromStr;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Accepted model timeouts, in seconds
const LLM_TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=3600;

/// Server and model configuration.
///
/// | Env Var              | Default                                             |
/// |----------------------|-----------------------------------------------------|
/// | `GEMINI_API_KEY`     | required                                            |
/// | `GEMINI_MODEL`       | `gemini-pro`                                        |
/// | `GEMINI_API_BASE`    | `https://generativelanguage.googleapis.com/v1beta`  |
/// | `GEMINI_TEMPERATURE` | unset                                               |
/// | `GEMINI_MAX_TOKENS`  | unset                                               |
/// | `LLM_TIMEOUT_SECS`   | `120` (1 to 3600)                                   |
/// | `HOST`               | `127.0.0.1`                                         |
/// | `PORT`               | `8501`                                              |
/// | `UPLOAD_LIMIT_BYTES` | `10485760`                                          |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base: String,
    pub llm: LlmConfig,
    pub llm_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub upload_limit_bytes: usize,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "{} environment variable is not set. Please configure it before starting the server.",
                    API_KEY_VAR
                ))
            })?;

        let llm = LlmConfig {
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| LlmConfig::default().model),
            temperature: parse_optional(&lookup, "GEMINI_TEMPERATURE")?,
            max_tokens: parse_optional(&lookup, "GEMINI_MAX_TOKENS")?,
        };

        if let Some(temperature) = llm.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(AppError::Config(format!(
                    "GEMINI_TEMPERATURE must be between 0.0 and 2.0, got {}",
                    temperature
                )));
            }
        }

        let llm_timeout_secs = parse_optional(&lookup, "LLM_TIMEOUT_SECS")?.unwrap_or(120);
        if !LLM_TIMEOUT_RANGE.contains(&llm_timeout_secs) {
            return Err(AppError::Config(format!(
                "LLM_TIMEOUT_SECS must be between {} and {}, got {}",
                LLM_TIMEOUT_RANGE.start(),
                LLM_TIMEOUT_RANGE.end(),
                llm_timeout_secs
            )));
        }

        Ok(Self {
            api_key,
            api_base: lookup("GEMINI_API_BASE").unwrap_or_else(|| GOOGLE_API_BASE.to_string()),
            llm,
            llm_timeout_secs,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_optional(&lookup, "PORT")?.unwrap_or(8501),
            upload_limit_bytes: parse_optional(&lookup, "UPLOAD_LIMIT_BYTES")?
                .unwrap_or(10 * 1024 * 1024),
        })
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_optional<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} has invalid value {:?}: {}", key, raw, e))),
    }
}
