//! Chat relay domain types for Courier.
//!
//! Defines the inbound message delivered by a chat gateway, the explicit
//! delivery target used for replies, and the request/response envelope
//! exchanged with the response worker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat message received from the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Gateway-assigned message ID (replies reference it).
    pub message_id: String,
    /// Channel the message was posted in.
    pub channel_id: String,
    /// Conversation scope forwarded to the worker (e.g. a guild ID).
    pub session_id: String,
    /// Author's gateway ID.
    pub author_id: String,
    /// Whether the author is itself a bot.
    #[serde(default)]
    pub author_is_bot: bool,
    /// Raw message text.
    pub content: String,
    /// Whether the message mentions this bot.
    #[serde(default)]
    pub mentions_bot: bool,
    /// When the gateway received the message.
    #[serde(default = "Utc::now")]
    pub received_at: DateTime<Utc>,
}

/// Where a chunk is delivered.
///
/// The caller picks the variant; sinks never infer it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeliveryTarget {
    /// Reply to a specific message.
    Reply {
        channel_id: String,
        message_id: String,
    },
    /// Post to a channel without a reply reference.
    Send { channel_id: String },
}

impl DeliveryTarget {
    /// Target replying to the given inbound message.
    pub fn reply_to(message: &InboundMessage) -> Self {
        DeliveryTarget::Reply {
            channel_id: message.channel_id.clone(),
            message_id: message.message_id.clone(),
        }
    }

    pub fn channel_id(&self) -> &str {
        match self {
            DeliveryTarget::Reply { channel_id, .. } | DeliveryTarget::Send { channel_id } => {
                channel_id
            }
        }
    }
}

/// Request body posted to the worker's `/chat` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub session_id: String,
    pub input: String,
    pub author: String,
    /// Whether the caller expects a reply to deliver.
    pub respond: bool,
}

impl ChatRequest {
    pub fn from_message(message: &InboundMessage, respond: bool) -> Self {
        Self {
            session_id: message.session_id.clone(),
            input: message.content.clone(),
            author: message.author_id.clone(),
            respond,
        }
    }
}

/// Response body returned by the worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Generated text, absent when the worker only recorded the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl ChatReply {
    /// The response text, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.response.as_deref().filter(|t| !t.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
