use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `POST /chat`: the whole transcript, every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Raw response body of `POST /chat`. Exactly one of the two fields is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Interpreted outcome of a chat round-trip that reached the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    Reply(String),
    ServiceError(String),
}

impl ChatResponseBody {
    /// A body carrying neither field is reported as `None`; callers treat it as a transport fault.
    pub fn into_reply(self) -> Option<ChatReply> {
        match (self.reply, self.error) {
            (Some(reply), _) if !reply.is_empty() => Some(ChatReply::Reply(reply)),
            (_, Some(error)) => Some(ChatReply::ServiceError(error)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatRequest {
            messages: vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")],
        })
        .unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][1]["role"], "assistant");
    }

    #[test]
    fn test_body_with_reply_is_reply() {
        let body: ChatResponseBody = serde_json::from_str(r#"{"reply": "sure"}"#).unwrap();
        assert_eq!(body.into_reply(), Some(ChatReply::Reply("sure".to_string())));
    }

    #[test]
    fn test_body_with_error_is_service_error() {
        let body: ChatResponseBody =
            serde_json::from_str(r#"{"error": "Server error", "details": "boom"}"#).unwrap();
        assert_eq!(
            body.into_reply(),
            Some(ChatReply::ServiceError("Server error".to_string()))
        );
    }

    #[test]
    fn test_empty_body_has_no_reply() {
        let body: ChatResponseBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_reply(), None);
    }
}
