#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::SecondsFormat;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Question,
    Answer,
    System,
}

/// One entry in a session transcript, matching the service's wire shape.
/// Message order is conversation order and is never edited in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "message_type")]
    pub kind: MessageKind,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub question_id: Option<i64>,
}

impl Message {
    pub fn answer(question_id: i64, content: &str) -> Message {
        return Message {
            kind: MessageKind::Answer,
            content: content.to_string().replace('\t', "  "),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            question_id: Some(question_id),
        };
    }

    /// Answers came from the user, everything else came from the service.
    pub fn author(&self) -> Author {
        if self.kind == MessageKind::Answer {
            return Author::User;
        }

        return Author::Wellcheck;
    }
}
