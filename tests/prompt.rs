use kader_matrisi::config::PromptConfig;
use kader_matrisi::prompt::{
    build_completion_request, previous_analysis_note, trim_history, AnalysisMode, ChatMessage,
    PromptKind, PromptRequest, Role,
};
use serde_json::json;

fn request(premium: bool, history: Vec<ChatMessage>, previous: Option<&str>) -> PromptRequest {
    PromptRequest {
        mode: AnalysisMode::Love,
        premium,
        payload: json!({ "overall_score": 82 }),
        chat_history: history,
        previous_analysis: previous.map(str::to_string),
    }
}

#[test]
fn kind_depends_on_history_and_premium() {
    assert_eq!(request(false, vec![], None).kind(10), PromptKind::Short);
    assert_eq!(request(true, vec![], None).kind(10), PromptKind::Deep);
    let chat = request(true, vec![ChatMessage::new(Role::User, "Hi")], None);
    assert_eq!(chat.kind(10), PromptKind::Chat);
}

#[test]
fn zero_history_limit_never_builds_a_chat() {
    let mut config = PromptConfig::default();
    config.history_limit = 0;
    let history = vec![
        ChatMessage::new(Role::User, "What about March?"),
        ChatMessage::new(Role::Assistant, "March is a turning point."),
    ];
    let short = request(false, history.clone(), None);
    assert_eq!(short.kind(config.history_limit), PromptKind::Short);

    let completion = build_completion_request(&short, &config);
    assert_eq!(completion.max_tokens, config.short_max_tokens);
    assert_eq!(completion.messages.len(), 2);
    assert!(completion.messages.iter().all(|m| !m.content.contains("March")));

    let deep = build_completion_request(&request(true, history, Some("old")), &config);
    assert_eq!(deep.max_tokens, config.deep_max_tokens);
}

#[test]
fn short_request_layout() {
    let config = PromptConfig::default();
    let completion = build_completion_request(&request(false, vec![], Some("old")), &config);

    assert_eq!(completion.model, "gpt-4o-mini");
    assert_eq!(completion.max_tokens, 500);
    assert!((completion.temperature - 0.75).abs() < 1e-9);
    assert_eq!(completion.messages.len(), 2);
    assert_eq!(completion.messages[0].role, Role::System);
    assert_eq!(completion.messages[1].role, Role::User);
    assert_eq!(completion.messages[1].content, r#"Context: {"overall_score":82}"#);
}

#[test]
fn deep_request_carries_previous_analysis() {
    let config = PromptConfig::default();
    let completion = build_completion_request(&request(true, vec![], Some("  earlier text  ")), &config);

    assert_eq!(completion.max_tokens, 4000);
    assert_eq!(completion.messages.len(), 3);
    assert_eq!(completion.messages[1].role, Role::System);
    assert_eq!(
        completion.messages[1].content,
        "Previous analysis:\nearlier text\n\nDo not repeat it; analyse from new angles."
    );
}

#[test]
fn chat_request_keeps_recent_history() {
    let mut history = vec![ChatMessage::new(Role::System, "ignored")];
    for index in 0..14 {
        let role = if index % 2 == 0 { Role::User } else { Role::Assistant };
        history.push(ChatMessage::new(role, format!("message {}", index)));
    }
    let config = PromptConfig::default();
    let completion = build_completion_request(&request(false, history, Some("old")), &config);

    assert_eq!(completion.max_tokens, 200);
    assert!((completion.temperature - 0.9).abs() < 1e-9);
    // system prompt + context + last ten turns
    assert_eq!(completion.messages.len(), 12);
    assert_eq!(completion.messages[2].content, "message 4");
    assert_eq!(completion.messages[11].content, "message 13");
    assert!(completion
        .messages
        .iter()
        .skip(1)
        .all(|message| message.role != Role::System));
}

#[test]
fn previous_analysis_is_truncated() {
    let long = "a".repeat(8005);
    let note = previous_analysis_note(&long, 8000).expect("non-empty");
    assert!(note.contains(&format!("{}\n...", "a".repeat(8000))));
    assert!(!note.contains(&"a".repeat(8001)));
    assert!(previous_analysis_note("   ", 8000).is_none());
}

#[test]
fn history_trim_drops_system_messages() {
    let history = vec![
        ChatMessage::new(Role::System, "s"),
        ChatMessage::new(Role::User, "u"),
        ChatMessage::new(Role::Assistant, "a"),
    ];
    let trimmed = trim_history(&history, 1);
    assert_eq!(trimmed, vec![ChatMessage::new(Role::Assistant, "a")]);
}

#[test]
fn request_parses_from_json() {
    let raw = r#"{"mode":"wealth","payload":{"company_number":8}}"#;
    let parsed: PromptRequest = serde_json::from_str(raw).expect("valid json");
    assert_eq!(parsed.mode, AnalysisMode::Wealth);
    assert!(!parsed.premium);
    assert_eq!(parsed.kind(10), PromptKind::Short);
    assert_eq!(AnalysisMode::from_str("Relationship"), Some(AnalysisMode::Love));
}
