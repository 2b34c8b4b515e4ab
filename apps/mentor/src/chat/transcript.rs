use crate::models::chat::{ChatMessage, ChatRequest};

/// Ordered messages of one chat session. Append-only until the session is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Starts a new session holding only `seed`.
    pub fn reset_to(&mut self, seed: ChatMessage) {
        self.messages.clear();
        self.messages.push(seed);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn to_request(&self) -> ChatRequest {
        ChatRequest {
            messages: self.messages.clone(),
        }
    }
}
