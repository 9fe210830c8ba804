use serde_derive::Deserialize;
use serde_derive::Serialize;

/// The service asks six questions per assessment. Submitting the last one
/// triggers scoring instead of a follow-up question.
pub const FINAL_QUESTION_ID: i64 = 6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default)]
    pub placeholder: String,
}

impl Question {
    pub fn is_final(&self) -> bool {
        return self.id == FINAL_QUESTION_ID;
    }
}
