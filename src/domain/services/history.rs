#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Utc;
use serde_json::Value;

use crate::domain::models::HistoryRecord;
use crate::domain::models::Message;
use crate::domain::models::RiskLevel;

/// The history endpoint has returned its list bare and wrapped under several
/// keys across service versions. Tried in order, first hit wins.
const WRAPPER_KEYS: [&str; 5] = ["sessions", "history", "records", "results", "data"];

/// Per-record fallback chains, first-present-wins. Older records spelled the
/// recommendation and summary fields differently.
const RECOMMENDATION_FIELDS: [&str; 2] = ["llm_recommendations", "recommendation"];
const SUMMARY_FIELDS: [&str; 2] = ["detailed_analysis", "summary"];
const TIMESTAMP_FIELDS: [&str; 2] = ["completed_at", "started_at"];

/// In-memory list of past completed assessments, rebuilt on every fetch.
#[derive(Default)]
pub struct History {
    pub records: Vec<HistoryRecord>,
}

impl History {
    /// Normalizes whatever the history endpoint returned. Only entries with
    /// both a completion marker and a numeric score become records; anything
    /// else is dropped without complaint so shape drift never breaks the
    /// list. Sorted most recent first.
    pub fn from_payload(payload: &Value) -> History {
        let mut records = extract_entries(payload)
            .iter()
            .filter_map(normalize)
            .collect::<Vec<HistoryRecord>>();

        records.sort_by(|a, b| return b.timestamp.cmp(&a.timestamp));

        return History { records };
    }

    pub fn get(&self, id: i64) -> Option<&HistoryRecord> {
        return self.records.iter().find(|record| return record.id == id);
    }

    /// Drops the matching record. Called only after the remote delete
    /// succeeded; a failed delete leaves the list untouched.
    pub fn remove(&mut self, id: i64) {
        self.records.retain(|record| return record.id != id);
    }
}

fn extract_entries(payload: &Value) -> Vec<Value> {
    if let Some(entries) = payload.as_array() {
        return entries.clone();
    }

    for key in WRAPPER_KEYS {
        if let Some(entries) = payload.get(key).and_then(Value::as_array) {
            return entries.clone();
        }
    }

    return vec![];
}

fn first_string(entry: &Value, fields: &[&str]) -> Option<String> {
    for field in fields {
        if let Some(value) = entry.get(field).and_then(Value::as_str) {
            return Some(value.to_string());
        }
    }

    return None;
}

fn normalize(entry: &Value) -> Option<HistoryRecord> {
    let id = entry.get("id")?.as_i64()?;

    let complete = entry
        .get("is_complete")
        .and_then(Value::as_bool)
        .unwrap_or(false)
        || entry.get("completed_at").and_then(Value::as_str).is_some();
    if !complete {
        return None;
    }

    // A completion marker without a score means the session died mid-scoring.
    let score = entry.get("burnout_score")?.as_f64()?;

    let level = entry
        .get("burnout_level")
        .and_then(Value::as_str)
        .map_or(RiskLevel::Unknown, RiskLevel::parse);

    let (timestamp, display_date) = match first_string(entry, &TIMESTAMP_FIELDS) {
        Some(raw) => match DateTime::parse_from_rfc3339(&raw) {
            Ok(parsed) => {
                let utc = parsed.with_timezone(&Utc);
                (utc, utc.format("%Y-%m-%d %H:%M").to_string())
            }
            Err(_) => (DateTime::<Utc>::MIN_UTC, raw),
        },
        None => (DateTime::<Utc>::MIN_UTC, "".to_string()),
    };

    let messages = entry
        .get("messages")
        .cloned()
        .map(serde_json::from_value::<Vec<Message>>)
        .and_then(Result::ok)
        .unwrap_or_default();

    return Some(HistoryRecord {
        id,
        display_date,
        level,
        score,
        recommendation: first_string(entry, &RECOMMENDATION_FIELDS).unwrap_or_default(),
        summary: first_string(entry, &SUMMARY_FIELDS).unwrap_or_default(),
        timestamp,
        messages,
    });
}
