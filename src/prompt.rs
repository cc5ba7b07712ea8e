use serde::{Deserialize, Serialize};

use crate::config::PromptConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Personal,
    Love,
    Wealth,
}

impl AnalysisMode {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "personal" | "numerology" => Some(AnalysisMode::Personal),
            "love" | "relationship" => Some(AnalysisMode::Love),
            "wealth" | "business" | "career" => Some(AnalysisMode::Wealth),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Chat,
    Short,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub mode: AnalysisMode,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub payload: serde_json::Value,
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
    #[serde(default)]
    pub previous_analysis: Option<String>,
}

/// Body of an OpenAI-style chat completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl PromptRequest {
    /// Decided from the history that will actually be sent, after trimming to `history_limit`.
    pub fn kind(&self, history_limit: usize) -> PromptKind {
        if !trim_history(&self.chat_history, history_limit).is_empty() {
            PromptKind::Chat
        } else if self.premium {
            PromptKind::Deep
        } else {
            PromptKind::Short
        }
    }
}

pub fn build_completion_request(request: &PromptRequest, config: &PromptConfig) -> CompletionRequest {
    let history = trim_history(&request.chat_history, config.history_limit);
    let kind = request.kind(config.history_limit);
    let mut messages = vec![ChatMessage::new(
        Role::System,
        system_prompt(request.mode, kind),
    )];

    if kind == PromptKind::Deep {
        if let Some(note) = request
            .previous_analysis
            .as_deref()
            .and_then(|text| previous_analysis_note(text, config.previous_analysis_max_chars))
        {
            messages.push(ChatMessage::new(Role::System, note));
        }
    }

    let payload = serde_json::to_string(&request.payload).unwrap_or_else(|_| "null".to_string());
    messages.push(ChatMessage::new(Role::User, format!("Context: {}", payload)));
    messages.extend(history);

    let (temperature, max_tokens) = match kind {
        PromptKind::Chat => (config.chat_temperature, config.chat_max_tokens),
        PromptKind::Short => (config.analysis_temperature, config.short_max_tokens),
        PromptKind::Deep => (config.analysis_temperature, config.deep_max_tokens),
    };

    tracing::debug!(
        mode = ?request.mode,
        kind = ?kind,
        messages = messages.len(),
        "assembled completion request"
    );

    CompletionRequest {
        model: config.model.clone(),
        messages,
        temperature,
        max_tokens,
    }
}

/// Keeps the last `limit` user and assistant messages.
pub fn trim_history(history: &[ChatMessage], limit: usize) -> Vec<ChatMessage> {
    let conversation: Vec<&ChatMessage> = history
        .iter()
        .filter(|message| matches!(message.role, Role::User | Role::Assistant))
        .collect();
    let skip = conversation.len().saturating_sub(limit);
    conversation.into_iter().skip(skip).cloned().collect()
}

pub fn previous_analysis_note(text: &str, max_chars: usize) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let excerpt = if trimmed.chars().count() > max_chars {
        let cut: String = trimmed.chars().take(max_chars).collect();
        format!("{}\n...", cut)
    } else {
        trimmed.to_string()
    };
    Some(format!(
        "Previous analysis:\n{}\n\nDo not repeat it; analyse from new angles.",
        excerpt
    ))
}

pub fn system_prompt(mode: AnalysisMode, kind: PromptKind) -> String {
    let expert = match mode {
        AnalysisMode::Personal => "a numerology expert",
        AnalysisMode::Love => "a relationship numerology expert",
        AnalysisMode::Wealth => "a business and wealth numerology expert",
    };
    let subject = match mode {
        AnalysisMode::Personal => "the person's numbers (expression, soul urge, personality, life path, personal year)",
        AnalysisMode::Love => "the couple's numbers, compatibility scores and conflicts",
        AnalysisMode::Wealth => "the founder, company number, registration energy and risk factors",
    };

    match kind {
        PromptKind::Chat => format!(
            r#"You are {expert} for Kader Matrisi, chatting with the user.
Ground every answer in {subject} from the context.
Rules:
- Reply naturally in 50-150 words.
- No headings, no lists, no markdown.
- Answer the last question directly, then add one insight they did not ask for.
"#
        ),
        PromptKind::Short => format!(
            r#"You are {expert} for Kader Matrisi.
Write a short analysis of {subject} from the context.
Rules:
- At most 300 words.
- Mention the concrete numbers.
- End with one sentence hinting at what the full premium analysis would reveal.
"#
        ),
        PromptKind::Deep => format!(
            r#"You are {expert} for Kader Matrisi.
Write a long, deep analysis of {subject} from the context.
Rules:
- Use markdown sections with headings.
- Cover strengths, shadows, timing for the coming year and concrete advice.
- Refer to the concrete numbers and explain how they interact.
- Speak directly to the reader in the second person.
"#
        ),
    }
}
