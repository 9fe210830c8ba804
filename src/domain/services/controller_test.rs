use super::SessionController;
use crate::domain::models::Action;
use crate::domain::models::AssessmentResult;
use crate::domain::models::Message;
use crate::domain::models::MessageKind;
use crate::domain::models::Question;
use crate::domain::models::RiskLevel;
use crate::domain::models::Session;
use crate::domain::models::SessionPhase;
use crate::domain::models::StartSessionResponse;
use crate::domain::models::SubmitAnswerResponse;

fn question(id: i64, text: &str) -> Question {
    return Question {
        id,
        text: text.to_string(),
        placeholder: "".to_string(),
    };
}

fn question_message(id: i64, text: &str) -> Message {
    return Message {
        kind: MessageKind::Question,
        content: text.to_string(),
        timestamp: "2024-05-01T10:00:00Z".to_string(),
        question_id: Some(id),
    };
}

fn started(session_id: i64) -> StartSessionResponse {
    return StartSessionResponse {
        session: Session {
            id: session_id,
            messages: vec![question_message(1, "How are your energy levels?")],
            is_complete: false,
        },
        current_question: question(1, "How are your energy levels?"),
    };
}

fn next_question(session_id: i64, answered: i64) -> SubmitAnswerResponse {
    let mut messages = vec![question_message(answered, "How are your energy levels?")];
    messages.push(Message::answer(answered, "tired but managing it alright"));
    messages.push(question_message(answered + 1, "How stressed are you?"));

    return SubmitAnswerResponse {
        session: Session {
            id: session_id,
            messages,
            is_complete: false,
        },
        assessment_complete: false,
        current_question: Some(question(answered + 1, "How stressed are you?")),
        result: None,
    };
}

fn completed(session_id: i64) -> SubmitAnswerResponse {
    return SubmitAnswerResponse {
        session: Session {
            id: session_id,
            messages: vec![question_message(6, "What about your future here?")],
            is_complete: true,
        },
        assessment_complete: true,
        current_question: None,
        result: Some(AssessmentResult {
            score: 0.72,
            level: RiskLevel::High,
            summary: Some("Sustained exhaustion across answers.".to_string()),
            recommendation: Some("**Rest**\nTake breaks".to_string()),
        }),
    };
}

fn generation_of(action: &Action) -> u64 {
    match action {
        Action::StartSession(generation) => return *generation,
        Action::SubmitAnswer(generation, _, _) => return *generation,
        _ => panic!("Action carries no generation"),
    }
}

const VALID_ANSWER: &str = "I feel tired and overwhelmed";

#[test]
fn it_starts_a_session() {
    let mut controller = SessionController::default();
    let action = controller.start_session().unwrap();
    assert_eq!(controller.phase(), SessionPhase::Starting);

    controller.on_session_started(generation_of(&action), started(10));

    assert_eq!(controller.phase(), SessionPhase::AwaitingAnswer);
    assert_eq!(controller.current_question().unwrap().id, 1);
    assert_eq!(controller.confirmed_messages().len(), 1);
    assert!(!controller.assessment_complete());
    assert!(controller.error().is_none());
}

#[test]
fn it_drops_start_while_a_call_is_in_flight() {
    let mut controller = SessionController::default();
    assert!(controller.start_session().is_some());
    assert!(controller.start_session().is_none());
}

#[test]
fn it_returns_to_idle_when_start_fails() {
    let mut controller = SessionController::default();
    let action = controller.start_session().unwrap();
    controller.on_start_failed(generation_of(&action), "Failed to start".to_string());

    assert_eq!(controller.phase(), SessionPhase::Idle);
    assert_eq!(controller.error(), Some("Failed to start"));
}

#[test]
fn it_drops_submissions_before_a_session_exists() {
    let mut controller = SessionController::default();
    assert!(controller.submit_answer(VALID_ANSWER).is_none());
}

#[test]
fn it_silently_drops_invalid_answers() {
    let mut controller = SessionController::default();
    let action = controller.start_session().unwrap();
    controller.on_session_started(generation_of(&action), started(10));

    assert!(controller.submit_answer("I'm ok").is_none());
    assert_eq!(controller.phase(), SessionPhase::AwaitingAnswer);
    assert!(controller.error().is_none());
    assert!(controller.pending().is_empty());
}

#[test]
fn it_appends_an_optimistic_answer_before_the_round_trip() {
    let mut controller = SessionController::default();
    let action = controller.start_session().unwrap();
    controller.on_session_started(generation_of(&action), started(10));

    let submit = controller.submit_answer(VALID_ANSWER).unwrap();
    match &submit {
        Action::SubmitAnswer(_, question_id, answer) => {
            assert_eq!(*question_id, 1);
            assert_eq!(answer, VALID_ANSWER);
        }
        _ => panic!("Wrong action"),
    }

    assert_eq!(controller.phase(), SessionPhase::Submitting);
    assert_eq!(controller.pending().len(), 1);
    assert_eq!(controller.pending()[0].message.content, VALID_ANSWER);
    assert_eq!(controller.pending()[0].message.question_id, Some(1));
    assert!(!controller.pending()[0].failed);
    assert!(!controller.is_analyzing());
}

#[test]
fn it_advances_to_the_servers_next_question() {
    let mut controller = SessionController::default();
    let action = controller.start_session().unwrap();
    controller.on_session_started(generation_of(&action), started(10));

    let submit = controller.submit_answer(VALID_ANSWER).unwrap();
    controller.on_answer_accepted(generation_of(&submit), next_question(10, 1));

    assert_eq!(controller.phase(), SessionPhase::AwaitingAnswer);
    assert_eq!(controller.current_question().unwrap().id, 2);
    assert!(!controller.assessment_complete());
    // The optimistic copy is gone; the canonical transcript holds the answer.
    assert!(controller.pending().is_empty());
    assert_eq!(controller.confirmed_messages().len(), 3);
}

#[test]
fn it_completes_on_the_final_question() {
    let mut controller = SessionController::default();
    let action = controller.start_session().unwrap();
    let mut response = started(10);
    response.current_question = question(6, "What about your future here?");
    controller.on_session_started(generation_of(&action), response);

    let submit = controller.submit_answer(VALID_ANSWER).unwrap();
    assert!(controller.is_analyzing());

    controller.on_answer_accepted(generation_of(&submit), completed(10));

    assert!(controller.assessment_complete());
    assert!(controller.current_question().is_none());
    assert!(!controller.is_analyzing());

    let result = controller.result().unwrap();
    assert_eq!(result.level, RiskLevel::High);
    assert_eq!(result.score, 0.72);

    // No further questions are accepted once complete.
    assert!(controller.submit_answer(VALID_ANSWER).is_none());
}

#[test]
fn it_keeps_the_failed_answer_visible_and_stays_resumable() {
    let mut controller = SessionController::default();
    let action = controller.start_session().unwrap();
    controller.on_session_started(generation_of(&action), started(10));

    let submit = controller.submit_answer(VALID_ANSWER).unwrap();
    controller.on_answer_failed(generation_of(&submit), "Failed to submit answer".to_string());

    assert_eq!(controller.phase(), SessionPhase::AwaitingAnswer);
    assert_eq!(controller.error(), Some("Failed to submit answer"));
    assert_eq!(controller.pending().len(), 1);
    assert!(controller.pending()[0].failed);

    // The user can resubmit.
    assert!(controller.submit_answer(VALID_ANSWER).is_some());
}

#[test]
fn it_overwrites_the_error_slot_instead_of_queueing() {
    let mut controller = SessionController::default();
    let action = controller.start_session().unwrap();
    controller.on_start_failed(generation_of(&action), "first".to_string());

    let retry = controller.start_session().unwrap();
    controller.on_start_failed(generation_of(&retry), "second".to_string());

    assert_eq!(controller.error(), Some("second"));
}

#[test]
fn it_discards_responses_from_superseded_requests() {
    let mut controller = SessionController::default();
    let action = controller.start_session().unwrap();
    let stale_generation = generation_of(&action);
    controller.on_session_started(stale_generation, started(10));

    let submit = controller.submit_answer(VALID_ANSWER).unwrap();

    // A late duplicate of the start response must not roll the conversation
    // back to question one.
    controller.on_session_started(stale_generation, started(99));

    assert_eq!(controller.phase(), SessionPhase::Submitting);
    assert_eq!(controller.pending().len(), 1);

    controller.on_answer_accepted(generation_of(&submit), next_question(10, 1));
    assert_eq!(controller.current_question().unwrap().id, 2);
}

#[test]
fn it_resets_prior_results_when_a_new_session_starts() {
    let mut controller = SessionController::default();
    let action = controller.start_session().unwrap();
    let mut response = started(10);
    response.current_question = question(6, "What about your future here?");
    controller.on_session_started(generation_of(&action), response);

    let submit = controller.submit_answer(VALID_ANSWER).unwrap();
    controller.on_answer_accepted(generation_of(&submit), completed(10));
    assert!(controller.result().is_some());

    let restart = controller.start_session().unwrap();
    controller.on_session_started(generation_of(&restart), started(11));

    assert!(controller.result().is_none());
    assert!(!controller.assessment_complete());
    assert_eq!(controller.current_question().unwrap().id, 1);
}
