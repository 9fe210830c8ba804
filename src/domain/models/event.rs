use tui_textarea::Input;

use super::AnalyzeResponse;
use super::HistoryRecord;
use super::StartSessionResponse;
use super::SubmitAnswerResponse;

pub enum Event {
    SessionStarted(u64, StartSessionResponse),
    SessionStartFailed(u64, String),
    AnswerAccepted(u64, SubmitAnswerResponse),
    AnswerFailed(u64, String),
    HistoryLoaded(Vec<HistoryRecord>),
    HistoryFailed(String),
    RecordDeleted(i64),
    RecordDeleteFailed(i64, String),
    AnalysisReady(AnalyzeResponse),
    AnalysisFailed(String),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
