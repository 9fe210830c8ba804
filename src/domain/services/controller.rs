#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

use crate::domain::models::Action;
use crate::domain::models::AssessmentResult;
use crate::domain::models::Message;
use crate::domain::models::Question;
use crate::domain::models::Session;
use crate::domain::models::SessionPhase;
use crate::domain::models::StartSessionResponse;
use crate::domain::models::SubmitAnswerResponse;

use super::AnswerValidator;

/// An answer shown in the transcript before the service has confirmed it.
/// Cleared when the canonical session arrives, marked failed when the submit
/// call fails so the UI can show it in a distinct state.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingAnswer {
    pub message: Message,
    pub failed: bool,
}

/// The conversation state machine. Local state is an explicit pair of the
/// last server-confirmed session and the optimistic answers layered on top;
/// every successful response replaces the confirmed session wholesale and
/// clears the optimistic layer.
///
/// Requests are tagged with a generation counter. In-flight calls are never
/// cancelled, so a late response can arrive after newer state was applied;
/// responses whose generation is not the latest issued are discarded.
pub struct SessionController {
    phase: SessionPhase,
    confirmed: Option<Session>,
    pending: Vec<PendingAnswer>,
    current_question: Option<Question>,
    result: Option<AssessmentResult>,
    error: Option<String>,
    generation: u64,
    analyzing: bool,
}

impl Default for SessionController {
    fn default() -> SessionController {
        return SessionController {
            phase: SessionPhase::Idle,
            confirmed: None,
            pending: vec![],
            current_question: None,
            result: None,
            error: None,
            generation: 0,
            analyzing: false,
        };
    }
}

impl SessionController {
    pub fn phase(&self) -> SessionPhase {
        return self.phase;
    }

    pub fn current_question(&self) -> Option<&Question> {
        return self.current_question.as_ref();
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        return self.result.as_ref();
    }

    pub fn error(&self) -> Option<&str> {
        return self.error.as_deref();
    }

    pub fn assessment_complete(&self) -> bool {
        return self.phase == SessionPhase::Complete;
    }

    /// True while the final answer is being scored, which takes noticeably
    /// longer than a question turn and deserves its own indicator.
    pub fn is_analyzing(&self) -> bool {
        return self.phase == SessionPhase::Submitting && self.analyzing;
    }

    pub fn confirmed_messages(&self) -> &[Message] {
        if let Some(session) = &self.confirmed {
            return &session.messages;
        }

        return &[];
    }

    pub fn pending(&self) -> &[PendingAnswer] {
        return &self.pending;
    }

    /// Starts a fresh session, discarding live tracking of the prior one (the
    /// server-side record is untouched). Dropped while a call is in flight.
    pub fn start_session(&mut self) -> Option<Action> {
        if self.phase.is_in_flight() {
            return None;
        }

        self.generation += 1;
        self.phase = SessionPhase::Starting;
        self.error = None;

        return Some(Action::StartSession(self.generation));
    }

    /// Validates and submits the answer to the currently open question,
    /// appending it optimistically so the transcript reflects it before the
    /// network round-trip. Invalid answers are ignored without an error, per
    /// the product's UX: the submit control is disabled, not scolding.
    pub fn submit_answer(&mut self, text: &str) -> Option<Action> {
        if self.phase != SessionPhase::AwaitingAnswer {
            return None;
        }
        if !AnswerValidator::is_valid(text) {
            return None;
        }

        let question = self.current_question.as_ref()?;
        let question_id = question.id;

        self.generation += 1;
        self.phase = SessionPhase::Submitting;
        self.analyzing = question.is_final();
        self.error = None;
        self.pending.push(PendingAnswer {
            message: Message::answer(question_id, text),
            failed: false,
        });

        return Some(Action::SubmitAnswer(
            self.generation,
            question_id,
            text.to_string(),
        ));
    }

    pub fn on_session_started(&mut self, generation: u64, response: StartSessionResponse) {
        if self.is_stale(generation) {
            return;
        }

        self.confirmed = Some(response.session);
        self.current_question = Some(response.current_question);
        self.pending.clear();
        self.result = None;
        self.error = None;
        self.analyzing = false;
        self.phase = SessionPhase::AwaitingAnswer;
    }

    pub fn on_start_failed(&mut self, generation: u64, error: String) {
        if self.is_stale(generation) {
            return;
        }

        self.phase = SessionPhase::Idle;
        self.error = Some(error);
    }

    pub fn on_answer_accepted(&mut self, generation: u64, response: SubmitAnswerResponse) {
        if self.is_stale(generation) {
            return;
        }

        // The canonical session already contains the answer; the optimistic
        // copy is dropped, not merged.
        let complete = response.assessment_complete || response.session.is_complete;
        self.confirmed = Some(response.session);
        self.pending.clear();
        self.analyzing = false;

        if complete {
            self.phase = SessionPhase::Complete;
            self.result = response.result;
            self.current_question = None;
        } else {
            self.current_question = response.current_question;
            self.phase = SessionPhase::AwaitingAnswer;
        }
    }

    /// The conversation stays resumable; the optimistic answer is kept but
    /// marked failed so the transcript doesn't silently claim it was
    /// delivered.
    pub fn on_answer_failed(&mut self, generation: u64, error: String) {
        if self.is_stale(generation) {
            return;
        }

        self.phase = SessionPhase::AwaitingAnswer;
        self.analyzing = false;
        self.error = Some(error);
        if let Some(pending) = self.pending.last_mut() {
            pending.failed = true;
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                response = generation,
                latest = self.generation,
                "Discarding stale response"
            );
            return true;
        }

        return false;
    }
}
