/// Where the conversation state machine currently sits. A single explicit
/// value rather than a pile of booleans; Starting and Submitting double as the
/// in-flight guard for reentrant calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Starting,
    AwaitingAnswer,
    Submitting,
    Complete,
}

impl SessionPhase {
    pub fn is_in_flight(&self) -> bool {
        return *self == SessionPhase::Starting || *self == SessionPhase::Submitting;
    }
}
