use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::application::services::prompt_builder::{analysis_prompt, chat_prompt, risk_prompt};
use crate::application::services::response_parser::{
    parse_risk_score, parse_sections, DEFAULT_RISK_SCORE,
};
use crate::domain::{AnalysisResult, Document};

const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(90);
const RISK_TIMEOUT: Duration = Duration::from_secs(30);
const CHAT_TIMEOUT: Duration = Duration::from_secs(60);

/// Orchestrates the two request-scoped flows: document analysis
/// (extract, prompt, call the model twice, parse) and follow-up chat.
pub struct AnalysisService<L>
where
    L: LlmClient,
{
    file_loader: Arc<dyn FileLoader>,
    llm_client: Arc<L>,
}

impl<L> AnalysisService<L>
where
    L: LlmClient,
{
    pub fn new(file_loader: Arc<dyn FileLoader>, llm_client: Arc<L>) -> Self {
        Self {
            file_loader,
            llm_client,
        }
    }

    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            size_bytes = document.size_bytes,
        )
    )]
    pub async fn analyze(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<AnalysisResult, AnalysisError> {
        let text = self.file_loader.extract_text(data, document).await?;

        tracing::debug!(chars = text.len(), "Document text extracted");

        // The main analysis and the risk score are data-independent, so the
        // two upstream calls run concurrently and join here. The prompt must
        // outlive both branches of the join.
        let prompt = analysis_prompt(&text);
        let (answer, risk) = tokio::join!(
            self.llm_client.generate(&prompt, ANALYSIS_TIMEOUT),
            self.assess_risk(&text),
        );
        let answer = answer.map_err(AnalysisError::Completion)?;

        let sections = parse_sections(&answer);

        tracing::info!(
            key_points = sections.key_points.len(),
            risks = sections.risks.len(),
            recommendations = sections.recommendations.len(),
            risk,
            "Document analysis complete"
        );

        Ok(AnalysisResult {
            explanation: sections.explanation,
            summary: sections.summary,
            key_points: sections.key_points,
            risks: sections.risks,
            recommendations: sections.recommendations,
            risk,
            full_text: text,
        })
    }

    /// Advisory sub-call: never fails the overall request. Upstream or parse
    /// failures degrade to the default score.
    async fn assess_risk(&self, text: &str) -> i32 {
        match self
            .llm_client
            .generate(&risk_prompt(text), RISK_TIMEOUT)
            .await
        {
            Ok(body) => parse_risk_score(&body),
            Err(e) => {
                tracing::warn!(error = %e, "Risk assessment call failed, using default score");
                DEFAULT_RISK_SCORE
            }
        }
    }

    #[tracing::instrument(skip(self, document_text, question))]
    pub async fn answer_question(
        &self,
        document_text: &str,
        question: &str,
    ) -> Result<String, LlmClientError> {
        self.llm_client
            .generate(&chat_prompt(document_text, question), CHAT_TIMEOUT)
            .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Extraction(#[from] FileLoaderError),
    #[error("{0}")]
    Completion(LlmClientError),
}
