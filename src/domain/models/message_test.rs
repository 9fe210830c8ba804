use super::Author;
use super::Message;
use super::MessageKind;

#[test]
fn it_builds_answers_tagged_with_the_question() {
    let msg = Message::answer(3, "I feel tired most days at work");
    assert_eq!(msg.kind, MessageKind::Answer);
    assert_eq!(msg.content, "I feel tired most days at work".to_string());
    assert_eq!(msg.question_id, Some(3));
    assert!(!msg.timestamp.is_empty());
}

#[test]
fn it_replaces_tabs_in_answers() {
    let msg = Message::answer(1, "\t\tI feel fine");
    assert_eq!(msg.content, "    I feel fine".to_string());
}

#[test]
fn it_attributes_answers_to_the_user() {
    let msg = Message::answer(1, "I feel fine");
    assert_eq!(msg.author(), Author::User);
}

#[test]
fn it_attributes_questions_and_system_messages_to_the_service() {
    let question: Message = serde_json::from_str(
        r#"{"message_type": "question", "content": "How are you?", "timestamp": "2024-05-01T10:00:00Z", "question_id": 1}"#,
    )
    .unwrap();
    assert_eq!(question.kind, MessageKind::Question);
    assert_eq!(question.author(), Author::Wellcheck);

    let system: Message =
        serde_json::from_str(r#"{"message_type": "system", "content": "Assessment complete!"}"#)
            .unwrap();
    assert_eq!(system.kind, MessageKind::System);
    assert_eq!(system.author(), Author::Wellcheck);
    assert_eq!(system.question_id, None);
}
