use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use medisense_core::models::report::ReportAnalysis;
use tracing::info;
use uuid::Uuid;

use crate::error::BedrockError;
use crate::prompt::{REPORT_SYSTEM_PROMPT, build_report_message};
use crate::report::parse_report_analysis;
use crate::tokens::{self, TokenCount};

/// The result of one Bedrock call.
#[derive(Debug)]
pub struct TransactionResult<T> {
    pub id: Uuid,
    pub model_id: String,
    pub usage: TokenCount,
    pub output: T,
}

/// Model-backed report analysis with a bounded wait.
#[derive(Debug, Clone)]
pub struct ReportAnalyzer {
    client: Client,
    model_id: String,
    timeout: Duration,
}

impl ReportAnalyzer {
    pub fn new(client: Client, model_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            timeout,
        }
    }
}

/// A model-backed report analysis. Callers treat every error as a reason to
/// fall back to the rule-based analysis.
#[async_trait]
pub trait ReportEnhancer: Send + Sync {
    fn model_id(&self) -> &str;

    async fn analyze(
        &self,
        text: &str,
    ) -> Result<TransactionResult<ReportAnalysis>, BedrockError>;
}

#[async_trait]
impl ReportEnhancer for ReportAnalyzer {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Fails with [`BedrockError::Timeout`] if the model does not answer in
    /// time.
    async fn analyze(
        &self,
        text: &str,
    ) -> Result<TransactionResult<ReportAnalysis>, BedrockError> {
        tokio::time::timeout(
            self.timeout,
            analyze_report(&self.client, &self.model_id, text),
        )
        .await
        .map_err(|_| BedrockError::Timeout(self.timeout.as_secs()))?
    }
}

/// Invoke Bedrock for report analysis and parse the structured reply.
pub async fn analyze_report(
    client: &Client,
    model_id: &str,
    text: &str,
) -> Result<TransactionResult<ReportAnalysis>, BedrockError> {
    let transaction_id = Uuid::new_v4();
    info!(transaction_id = %transaction_id, model = model_id, "starting report analysis");

    let user_message = build_report_message(text);
    let (response_text, usage) =
        invoke_converse(client, model_id, REPORT_SYSTEM_PROMPT, &user_message).await?;

    let analysis = parse_report_analysis(&response_text)?;

    info!(
        transaction_id = %transaction_id,
        input_tokens = usage.input,
        output_tokens = usage.output,
        "report analysis complete"
    );

    Ok(TransactionResult {
        id: transaction_id,
        model_id: model_id.to_string(),
        usage,
        output: analysis,
    })
}

/// Core invocation using the Bedrock Converse API.
/// Returns the response text and token usage.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<(String, TokenCount), BedrockError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let usage = response
        .usage()
        .map(tokens::extract_token_usage)
        .unwrap_or_default();

    Ok((response_text, usage))
}
