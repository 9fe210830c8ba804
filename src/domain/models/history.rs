use chrono::DateTime;
use chrono::Utc;

use super::Message;
use super::RiskLevel;

/// Normalized, read-only view of one past completed assessment. Rebuilt from
/// scratch on every history fetch, never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryRecord {
    pub id: i64,
    pub display_date: String,
    pub level: RiskLevel,
    pub score: f64,
    pub recommendation: String,
    pub summary: String,
    pub timestamp: DateTime<Utc>,
    pub messages: Vec<Message>,
}
