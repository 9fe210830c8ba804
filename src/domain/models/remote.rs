use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::AssessmentResult;
use super::Question;
use super::RiskLevel;
use super::Session;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session: Session,
    pub current_question: Question,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub session: Session,
    #[serde(default)]
    pub assessment_complete: bool,
    #[serde(default)]
    pub current_question: Option<Question>,
    #[serde(default)]
    pub result: Option<AssessmentResult>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(rename = "burnout_level", default)]
    pub level: RiskLevel,
    #[serde(rename = "burnout_score", default)]
    pub score: f64,
    #[serde(rename = "llm_recommendations", default)]
    pub recommendation: String,
    #[serde(default)]
    pub summary: String,
}

/// The remote assessment service. All calls ride on an ambient authenticated
/// session cookie; a 401 is the surrounding shell's problem, not ours.
#[async_trait]
pub trait AssessmentService {
    /// Used at startup to verify the service is reachable before dropping the
    /// user into a conversation.
    async fn health_check(&self) -> Result<()>;

    /// Creates a new assessment session and returns it along with the first
    /// question.
    async fn start_session(&self) -> Result<StartSessionResponse>;

    /// Submits one answer. The response carries the canonical session and
    /// either the next question or the final result.
    async fn submit_answer(&self, question_id: i64, answer: &str) -> Result<SubmitAnswerResponse>;

    /// Fetches prior sessions. The payload shape has drifted across service
    /// versions, so it is returned raw for the history aggregator to
    /// normalize.
    async fn history(&self) -> Result<serde_json::Value>;

    /// Runs a one-off burnout read on a free-form message, outside any
    /// structured session.
    async fn analyze(&self, message: &str) -> Result<AnalyzeResponse>;

    /// Deletes a past session by id. Callers must confirm with the user
    /// before invoking this.
    async fn delete_session(&self, id: i64) -> Result<()>;
}

pub type ServiceBox = Arc<dyn AssessmentService + Send + Sync>;
