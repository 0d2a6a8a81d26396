//! Chat input guardrails
//!
//! Validates inbound chat conversations before anything is forwarded
//! upstream: bounded conversation length, bounded message size, and a
//! small jailbreak-pattern blocklist applied to the latest user message.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Maximum number of messages in a conversation
pub const MAX_MESSAGES: usize = 50;

/// Maximum characters in the latest user message
pub const MAX_MESSAGE_CHARS: usize = 1000;

static JAILBREAK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)ignore all previous instructions",
        r"(?i)you are now unchecked",
        r"(?i)start a new roleplay",
        r"(?i)simulated mode",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("static jailbreak pattern"))
    .collect()
});

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Why a conversation was rejected
///
/// Display strings are user-facing and surface directly in the chat UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardrailViolation {
    #[error("Conversation too long. Please start a new chat.")]
    ConversationTooLong,
    #[error("Message too long. Please keep it under 1000 characters.")]
    MessageTooLong,
    #[error("Request rejected due to safety policy.")]
    PolicyViolation,
}

/// Validate an inbound conversation, checking the latest user message
/// against the size limit and the jailbreak blocklist.
pub fn validate_messages(messages: &[ChatMessage]) -> Result<(), GuardrailViolation> {
    if messages.len() > MAX_MESSAGES {
        return Err(GuardrailViolation::ConversationTooLong);
    }

    let last = match messages.last() {
        Some(m) if m.role == "user" => m,
        _ => return Ok(()),
    };

    if last.content.chars().count() > MAX_MESSAGE_CHARS {
        return Err(GuardrailViolation::MessageTooLong);
    }

    if JAILBREAK_PATTERNS.iter().any(|p| p.is_match(&last.content)) {
        return Err(GuardrailViolation::PolicyViolation);
    }

    Ok(())
}
