use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::ServiceBox;
use crate::domain::services::History;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /new (/n) - Starts a fresh assessment session, replacing the current one.
- /history (/hist) - Lists your past assessment sessions.
- /chat (/back) - Returns to the current assessment from the history view.
- /view (/v) [SESSION_ID] - Shows the full transcript and result of a past session.
- /analyze (/a) [MESSAGE] - Gets a one-off burnout read on whatever is on your mind.
- /delete (/d) [SESSION_ID] - Marks a past session for deletion. Run /confirm to delete it.
- /confirm - Confirms a pending /delete.
- /quit /exit (/q) - Exit Wellcheck.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        service: ServiceBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let action = rx.recv().await;
            if action.is_none() {
                continue;
            }

            let worker_service = service.clone();
            let worker_tx = tx.clone();

            // Each request runs on its own task so a slow server never blocks
            // the action queue. Responses carry the generation they were
            // issued under, letting the session state machine drop the stale
            // ones.
            match action.unwrap() {
                Action::StartSession(generation) => {
                    tokio::spawn(async move {
                        match worker_service.start_session().await {
                            Ok(res) => {
                                let _ = worker_tx.send(Event::SessionStarted(generation, res));
                            }
                            Err(err) => {
                                tracing::error!(error = ?err, "start session failed");
                                let _ = worker_tx
                                    .send(Event::SessionStartFailed(generation, err.to_string()));
                            }
                        }
                    });
                }
                Action::SubmitAnswer(generation, question_id, answer) => {
                    tokio::spawn(async move {
                        match worker_service.submit_answer(question_id, &answer).await {
                            Ok(res) => {
                                let _ = worker_tx.send(Event::AnswerAccepted(generation, res));
                            }
                            Err(err) => {
                                tracing::error!(error = ?err, question_id = question_id, "submit answer failed");
                                let _ = worker_tx
                                    .send(Event::AnswerFailed(generation, err.to_string()));
                            }
                        }
                    });
                }
                Action::FetchHistory() => {
                    tokio::spawn(async move {
                        match worker_service.history().await {
                            Ok(payload) => {
                                let history = History::from_payload(&payload);
                                let _ = worker_tx.send(Event::HistoryLoaded(history.records));
                            }
                            Err(err) => {
                                tracing::error!(error = ?err, "history fetch failed");
                                let _ = worker_tx.send(Event::HistoryFailed(err.to_string()));
                            }
                        }
                    });
                }
                Action::Analyze(message) => {
                    tokio::spawn(async move {
                        match worker_service.analyze(&message).await {
                            Ok(res) => {
                                let _ = worker_tx.send(Event::AnalysisReady(res));
                            }
                            Err(err) => {
                                tracing::error!(error = ?err, "analyze failed");
                                let _ = worker_tx.send(Event::AnalysisFailed(err.to_string()));
                            }
                        }
                    });
                }
                Action::DeleteRecord(id) => {
                    tokio::spawn(async move {
                        match worker_service.delete_session(id).await {
                            Ok(()) => {
                                let _ = worker_tx.send(Event::RecordDeleted(id));
                            }
                            Err(err) => {
                                tracing::error!(error = ?err, session_id = id, "delete failed");
                                let _ = worker_tx
                                    .send(Event::RecordDeleteFailed(id, err.to_string()));
                            }
                        }
                    });
                }
            }
        }
    }
}
