//! Generation Client: one round trip to the provider per call.
//!
//! Flow: build_request → LlmClient::call → parse_generation.
//! Stateless: no retries, no caching, no internal locking. Request status
//! and stale-response handling belong to the caller (see `tracker`).

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::llm_client::{LlmClient, LlmError};
use crate::outreach::builder::build_request;
use crate::outreach::models::{ContactRequest, GenerationResult};
use crate::outreach::parser::parse_generation;

/// The one message shown for every provider-side failure.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "无法连接到 AI 服务，请检查网络或 API Key。";

/// Every way a generation cycle can fail. Kept distinct for logs; collapsed to
/// one user-facing message by `user_message`.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Provider error (status {status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Empty generation")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Stable machine-readable name of the failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::InvalidInput(_) => "INVALID_INPUT",
            GenerationError::Transport(_) => "TRANSPORT_FAILURE",
            GenerationError::Provider { .. } => "PROVIDER_ERROR",
            GenerationError::EmptyResponse => "EMPTY_RESPONSE",
            GenerationError::MalformedResponse(_) => "MALFORMED_RESPONSE",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            GenerationError::InvalidInput(msg) => msg.clone(),
            _ => SERVICE_UNAVAILABLE_MESSAGE.to_string(),
        }
    }
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(e) => GenerationError::Transport(e.to_string()),
            LlmError::Api { status, message } => GenerationError::Provider { status, message },
            LlmError::Parse(e) => {
                GenerationError::MalformedResponse(format!("unreadable provider envelope: {e}"))
            }
        }
    }
}

/// Produces a script for a contact. Implement this to swap providers without
/// touching the handler or caller code.
///
/// Carried in `AppState` as `Arc<dyn ScriptGenerator>`.
#[async_trait]
pub trait ScriptGenerator: Send + Sync {
    async fn generate(&self, request: &ContactRequest) -> Result<GenerationResult, GenerationError>;
}

/// Gemini-backed generator.
pub struct GeminiScriptGenerator {
    llm: LlmClient,
}

impl GeminiScriptGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn call_provider(
        &self,
        request: &ContactRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let built = build_request(request);
        let response = self.llm.call(&built.to_provider_request()).await?;
        parse_generation(response.text().as_deref())
    }
}

#[async_trait]
impl ScriptGenerator for GeminiScriptGenerator {
    async fn generate(&self, request: &ContactRequest) -> Result<GenerationResult, GenerationError> {
        match self.call_provider(request).await {
            Ok(result) => {
                let length = result.script_length();
                info!(
                    "Script generated for {:?}: {} chars (over limit: {})",
                    request.scenario, length.chars, length.over_limit
                );
                Ok(result)
            }
            Err(e) => {
                error!(kind = e.code(), "Script generation failed: {e}");
                Err(e)
            }
        }
    }
}
