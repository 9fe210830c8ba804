#[cfg(test)]
#[path = "presenter_test.rs"]
mod tests;

use crate::domain::models::AssessmentResult;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::RiskLevel;

/// Shown when a completed assessment carries no recommendation text at all,
/// so the result card never renders an empty block.
const NO_RECOMMENDATION_PLACEHOLDER: &str =
    "No specific recommendations were generated for this assessment.";

/// The recommendation wire format wraps emphasized titles in `**` pairs.
/// Splitting on the marker yields alternating plain and emphasized segments;
/// plain segments are broken into individual display lines.
#[derive(Clone, Debug, PartialEq)]
pub enum RecommendationSegment {
    Plain(String),
    Emphasis(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub icon: &'static str,
    pub headline: String,
    pub description: &'static str,
    pub score_percent: u32,
    pub summary: Option<String>,
    pub recommendation: Vec<RecommendationSegment>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptEntry {
    pub author: Author,
    pub content: String,
}

pub struct ResultPresenter {}

impl ResultPresenter {
    pub fn severity_icon(level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::Low => return "🟢",
            RiskLevel::Moderate => return "🟡",
            RiskLevel::High => return "🔴",
            RiskLevel::Unknown => return "📊",
        }
    }

    pub fn severity_description(level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::Low => {
                return "You are managing well with minimal burnout symptoms";
            }
            RiskLevel::Moderate => {
                return "You are experiencing some burnout symptoms that need attention";
            }
            RiskLevel::High => {
                return "You are experiencing significant burnout symptoms that require immediate attention";
            }
            RiskLevel::Unknown => return "Assessment complete",
        }
    }

    pub fn score_percent(score: f64) -> u32 {
        return (score * 100.0).round() as u32;
    }

    pub fn recommendation_segments(text: &str) -> Vec<RecommendationSegment> {
        if text.trim().is_empty() {
            return vec![RecommendationSegment::Plain(
                NO_RECOMMENDATION_PLACEHOLDER.to_string(),
            )];
        }

        let mut segments: Vec<RecommendationSegment> = vec![];
        for (idx, section) in text.split("**").enumerate() {
            if idx % 2 == 1 {
                let trimmed = section.trim();
                if !trimmed.is_empty() {
                    segments.push(RecommendationSegment::Emphasis(trimmed.to_string()));
                }
                continue;
            }

            for line in section.split('\n') {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                segments.push(RecommendationSegment::Plain(trimmed.to_string()));
            }
        }

        // Marker-only input reduces to nothing once blanks are dropped.
        if segments.is_empty() {
            return vec![RecommendationSegment::Plain(
                NO_RECOMMENDATION_PLACEHOLDER.to_string(),
            )];
        }

        return segments;
    }

    pub fn view(result: &AssessmentResult) -> ResultView {
        let summary = result
            .summary
            .as_deref()
            .map(str::trim)
            .filter(|text| return !text.is_empty())
            .map(str::to_string);

        return ResultView {
            icon: ResultPresenter::severity_icon(result.level),
            headline: format!("{} BURNOUT RISK", result.level),
            description: ResultPresenter::severity_description(result.level),
            score_percent: ResultPresenter::score_percent(result.score),
            summary,
            recommendation: ResultPresenter::recommendation_segments(
                result.recommendation.as_deref().unwrap_or(""),
            ),
        };
    }

    /// Transcript in stored order; the only transformation is tagging each
    /// message with who it came from. No reordering, no deduplication.
    pub fn transcript(messages: &[Message]) -> Vec<TranscriptEntry> {
        return messages
            .iter()
            .map(|message| {
                return TranscriptEntry {
                    author: message.author(),
                    content: message.content.to_string(),
                };
            })
            .collect();
    }
}
