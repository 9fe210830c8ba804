/// Requests handed to the background worker. Session calls carry the
/// generation counter that tagged them so stale responses can be discarded on
/// the way back in.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    StartSession(u64),
    SubmitAnswer(u64, i64, String),
    FetchHistory(),
    DeleteRecord(i64),
    Analyze(String),
}
