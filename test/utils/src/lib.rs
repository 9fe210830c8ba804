/// History payload as the current service emits it: wrapped under `sessions`,
/// with one record using the current field names, one shaped like the legacy
/// serializer, and one abandoned mid-assessment that must be filtered out.
pub fn history_payload_fixture() -> &'static str {
    return r#"{
  "success": true,
  "total_sessions": 3,
  "sessions": [
    {
      "id": 12,
      "started_at": "2024-06-02T09:10:00Z",
      "completed_at": "2024-06-02T09:30:00Z",
      "is_complete": true,
      "burnout_score": 0.72,
      "burnout_level": "HIGH",
      "llm_recommendations": "**Rest**\nTake breaks\n**Talk**\nSee someone",
      "detailed_analysis": "Sustained exhaustion across all answers.",
      "messages": [
        {
          "message_type": "question",
          "content": "How are your energy levels?",
          "timestamp": "2024-06-02T09:10:05Z",
          "question_id": 1
        },
        {
          "message_type": "answer",
          "content": "Completely drained by midweek no matter what",
          "timestamp": "2024-06-02T09:11:00Z",
          "question_id": 1
        }
      ]
    },
    {
      "id": 8,
      "started_at": "2024-05-20T17:40:00Z",
      "completed_at": "2024-05-20T18:00:00Z",
      "burnout_score": 0.31,
      "burnout_level": "LOW",
      "recommendation": "Keep up your current routines.",
      "summary": "Healthy balance overall.",
      "messages": []
    },
    {
      "id": 5,
      "started_at": "2024-05-01T08:00:00Z",
      "is_complete": false,
      "burnout_score": null,
      "messages": []
    }
  ]
}"#;
}

/// Recommendation text in the paired-marker convention the service uses:
/// emphasized titles wrapped in `**`, plain lines between them.
pub fn recommendation_fixture() -> &'static str {
    return "**Rest**\nTake breaks\n**Talk**\nSee someone";
}
