#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Value;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnalyzeResponse;
use crate::domain::models::AssessmentService;
use crate::domain::models::StartSessionResponse;
use crate::domain::models::SubmitAnswerResponse;

#[derive(Debug, Serialize)]
struct SubmitAnswerRequest<'a> {
    question_id: i64,
    answer: &'a str,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

pub struct HttpService {
    url: String,
    timeout: String,
    cookie: String,
}

impl Default for HttpService {
    fn default() -> HttpService {
        return HttpService {
            url: Config::get(ConfigKey::ServiceURL),
            timeout: Config::get(ConfigKey::ServiceTimeout),
            cookie: Config::get(ConfigKey::SessionCookie),
        };
    }
}

impl HttpService {
    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.cookie.is_empty() {
            return builder;
        }

        return builder.header("Cookie", format!("sessionid={}", self.cookie));
    }

    /// A failed call surfaces the service's own error message when the body
    /// carries one, otherwise the fallback. Transport errors always get the
    /// fallback; their details go to the debug log, not the transcript.
    async fn error_from(res: reqwest::Response, fallback: &str) -> anyhow::Error {
        let status = res.status().as_u16();
        if let Ok(body) = res.json::<ErrorResponse>().await {
            tracing::error!(status = status, error = body.error, "service error");
            return anyhow!(body.error);
        }

        tracing::error!(status = status, "service error without a message");
        return anyhow!(fallback.to_string());
    }
}

#[async_trait]
impl AssessmentService for HttpService {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "service is not reachable");
            bail!("The assessment service is not reachable");
        }

        if res.unwrap().status().is_server_error() {
            bail!("The assessment service is failing its health check");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn start_session(&self) -> Result<StartSessionResponse> {
        let res = self
            .request(reqwest::Client::new().post(format!("{url}/chatbot/start-session/", url = self.url)))
            .json(&serde_json::json!({}))
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "start session request failed");
                bail!("Failed to start an assessment session");
            }
        };

        if !res.status().is_success() {
            return Err(HttpService::error_from(res, "Failed to start an assessment session").await);
        }

        return Ok(res.json::<StartSessionResponse>().await?);
    }

    #[allow(clippy::implicit_return)]
    async fn submit_answer(&self, question_id: i64, answer: &str) -> Result<SubmitAnswerResponse> {
        let res = self
            .request(reqwest::Client::new().post(format!("{url}/chatbot/submit-answer/", url = self.url)))
            .json(&SubmitAnswerRequest {
                question_id,
                answer,
            })
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, question_id = question_id, "submit request failed");
                bail!("Failed to submit your answer");
            }
        };

        if !res.status().is_success() {
            return Err(HttpService::error_from(res, "Failed to submit your answer").await);
        }

        return Ok(res.json::<SubmitAnswerResponse>().await?);
    }

    #[allow(clippy::implicit_return)]
    async fn history(&self) -> Result<Value> {
        let res = self
            .request(reqwest::Client::new().get(format!("{url}/chatbot/history/", url = self.url)))
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "history request failed");
                bail!("Failed to load your assessment history");
            }
        };

        if !res.status().is_success() {
            return Err(
                HttpService::error_from(res, "Failed to load your assessment history").await,
            );
        }

        return Ok(res.json::<Value>().await?);
    }

    #[allow(clippy::implicit_return)]
    async fn analyze(&self, message: &str) -> Result<AnalyzeResponse> {
        let res = self
            .request(reqwest::Client::new().post(format!("{url}/chatbot/analyze-burnout/", url = self.url)))
            .json(&AnalyzeRequest {
                message,
            })
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "analyze request failed");
                bail!("Failed to analyze your message");
            }
        };

        if !res.status().is_success() {
            return Err(HttpService::error_from(res, "Failed to analyze your message").await);
        }

        return Ok(res.json::<AnalyzeResponse>().await?);
    }

    #[allow(clippy::implicit_return)]
    async fn delete_session(&self, id: i64) -> Result<()> {
        let res = self
            .request(
                reqwest::Client::new()
                    .delete(format!("{url}/chatbot/session/{id}/delete/", url = self.url)),
            )
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, session_id = id, "delete request failed");
                bail!("Failed to delete the session");
            }
        };

        if !res.status().is_success() {
            return Err(HttpService::error_from(res, "Failed to delete the session").await);
        }

        return Ok(());
    }
}
