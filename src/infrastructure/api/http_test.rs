use anyhow::Result;
use serde_json::json;

use super::HttpService;
use crate::domain::models::AssessmentService;
use crate::domain::models::RiskLevel;

impl HttpService {
    fn with_url(url: String) -> HttpService {
        return HttpService {
            url,
            timeout: "200".to_string(),
            cookie: "".to_string(),
        };
    }

    fn with_cookie(url: String, cookie: &str) -> HttpService {
        let mut service = HttpService::with_url(url);
        service.cookie = cookie.to_string();
        return service;
    }
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").with_status(200).create();

    let service = HttpService::with_url(server.url());
    let res = service.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks_when_unreachable() {
    let service = HttpService::with_url("http://127.0.0.1:1".to_string());
    let res = service.health_check().await;

    assert_eq!(
        res.unwrap_err().to_string(),
        "The assessment service is not reachable"
    );
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").with_status(500).create();

    let service = HttpService::with_url(server.url());
    let res = service.health_check().await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_starts_a_session() -> Result<()> {
    let body = json!({
        "session": {"id": 42, "messages": [], "is_complete": false},
        "current_question": {"id": 1, "question": "How are your energy levels?"},
    })
    .to_string();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chatbot/start-session/")
        .with_status(200)
        .with_body(body)
        .create();

    let service = HttpService::with_url(server.url());
    let res = service.start_session().await?;

    assert_eq!(res.session.id, 42);
    assert_eq!(res.current_question.id, 1);
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_sends_the_session_cookie() -> Result<()> {
    let body = json!({
        "session": {"id": 42},
        "current_question": {"id": 1, "question": "How are your energy levels?"},
    })
    .to_string();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chatbot/start-session/")
        .match_header("cookie", "sessionid=abc123")
        .with_status(200)
        .with_body(body)
        .create();

    let service = HttpService::with_cookie(server.url(), "abc123");
    service.start_session().await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_submits_an_answer_and_gets_the_next_question() -> Result<()> {
    let body = json!({
        "session": {"id": 42, "messages": [
            {"message_type": "question", "content": "How are your energy levels?", "question_id": 1},
            {"message_type": "answer", "content": "Completely drained by midweek no matter what", "question_id": 1},
        ]},
        "assessment_complete": false,
        "current_question": {"id": 2, "question": "How is your sleep?"},
    })
    .to_string();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chatbot/submit-answer/")
        .match_body(mockito::Matcher::Json(json!({
            "question_id": 1,
            "answer": "Completely drained by midweek no matter what",
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let service = HttpService::with_url(server.url());
    let res = service
        .submit_answer(1, "Completely drained by midweek no matter what")
        .await?;

    assert!(!res.assessment_complete);
    assert_eq!(res.current_question.unwrap().id, 2);
    assert_eq!(res.session.messages.len(), 2);
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_parses_a_completed_assessment() -> Result<()> {
    let body = json!({
        "session": {"id": 42, "is_complete": true},
        "assessment_complete": true,
        "result": {
            "score": 0.72,
            "level": "HIGH",
            "detailed_analysis": "Sustained exhaustion across all answers.",
            "llm_recommendations": "**Rest**\nTake breaks",
        },
    })
    .to_string();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chatbot/submit-answer/")
        .with_status(200)
        .with_body(body)
        .create();

    let service = HttpService::with_url(server.url());
    let res = service.submit_answer(6, "I would rate my workload as unmanageable").await?;

    assert!(res.assessment_complete);
    assert!(res.current_question.is_none());
    assert_eq!(res.result.unwrap().score, 0.72);
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_surfaces_the_service_error_message() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chatbot/submit-answer/")
        .with_status(400)
        .with_body(json!({"error": "Answer must be at least 5 words."}).to_string())
        .create();

    let service = HttpService::with_url(server.url());
    let res = service.submit_answer(1, "nope").await;

    assert_eq!(
        res.unwrap_err().to_string(),
        "Answer must be at least 5 words."
    );
    mock.assert();
}

#[tokio::test]
async fn it_falls_back_to_a_generic_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chatbot/submit-answer/")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let service = HttpService::with_url(server.url());
    let res = service.submit_answer(1, "whatever text goes through here").await;

    assert_eq!(res.unwrap_err().to_string(), "Failed to submit your answer");
    mock.assert();
}

#[tokio::test]
async fn it_returns_the_raw_history_payload() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/chatbot/history/")
        .with_status(200)
        .with_body(test_utils::history_payload_fixture())
        .create();

    let service = HttpService::with_url(server.url());
    let res = service.history().await?;

    assert_eq!(res["total_sessions"], 3);
    assert!(res["sessions"].is_array());
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_analyzes_a_free_form_message() -> Result<()> {
    let body = json!({
        "success": true,
        "burnout_level": "HIGH",
        "burnout_score": 0.85,
        "color": "🔴",
        "llm_recommendations": "**Rest**\nTake breaks",
        "summary": "You sound exhausted",
        "user_input": "I dread opening my laptop every morning",
    })
    .to_string();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chatbot/analyze-burnout/")
        .match_body(mockito::Matcher::Json(json!({
            "message": "I dread opening my laptop every morning",
        })))
        .with_status(200)
        .with_body(body)
        .create();

    let service = HttpService::with_url(server.url());
    let res = service
        .analyze("I dread opening my laptop every morning")
        .await?;

    assert_eq!(res.level, RiskLevel::High);
    assert_eq!(res.score, 0.85);
    assert_eq!(res.summary, "You sound exhausted");
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_analyze_an_empty_message() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chatbot/analyze-burnout/")
        .with_status(400)
        .with_body(json!({"error": "Message is required"}).to_string())
        .create();

    let service = HttpService::with_url(server.url());
    let res = service.analyze("").await;

    assert_eq!(res.unwrap_err().to_string(), "Message is required");
    mock.assert();
}

#[tokio::test]
async fn it_deletes_a_session() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/chatbot/session/12/delete/")
        .with_status(200)
        .with_body(json!({"success": true, "message": "Session deleted successfully"}).to_string())
        .create();

    let service = HttpService::with_url(server.url());
    service.delete_session(12).await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_delete_a_missing_session() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/chatbot/session/99/delete/")
        .with_status(404)
        .with_body(json!({"error": "Session not found"}).to_string())
        .create();

    let service = HttpService::with_url(server.url());
    let res = service.delete_session(99).await;

    assert_eq!(res.unwrap_err().to_string(), "Session not found");
    mock.assert();
}
