use std::fmt;

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Risk levels as the service reports them. The service has grown levels
/// before, so anything unrecognized maps to Unknown instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "HIGH")]
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    pub fn parse(value: &str) -> RiskLevel {
        match value {
            "LOW" => return RiskLevel::Low,
            "MODERATE" => return RiskLevel::Moderate,
            "HIGH" => return RiskLevel::High,
            _ => return RiskLevel::Unknown,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Unknown => "UNKNOWN",
        };

        return write!(f, "{label}");
    }
}

/// Scoring output produced once per completed session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Normalized to [0, 1] by the service's model.
    pub score: f64,
    #[serde(default)]
    pub level: RiskLevel,
    #[serde(rename = "detailed_analysis", default)]
    pub summary: Option<String>,
    #[serde(rename = "llm_recommendations", default)]
    pub recommendation: Option<String>,
}
