use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Message;

/// A single assessment conversation as the service reports it. The server copy
/// is canonical; the controller replaces its local copy wholesale on every
/// response rather than patching it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub is_complete: bool,
}
