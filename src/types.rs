use serde::{Deserialize, Serialize};

/// Sender or recipient of a message, identified by a platform-assigned ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
}

/// Text message carried inside a messaging event. Absent for delivery
/// receipts, read receipts, and postbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "mid")]
    pub message_id: String,
    #[serde(rename = "seq")]
    pub sequence_number: i64,
    pub text: String,
}

/// One interaction delivered by the platform. The unit of dispatch: every
/// event that carries a message is handled independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingEvent {
    pub sender: Participant,
    pub recipient: Participant,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<InboundMessage>,
}

/// Batch of messaging events sharing a page ID and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEntry {
    pub id: i64,
    pub time: i64,
    pub messaging: Vec<MessagingEvent>,
}

/// Top-level webhook delivery body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookBatch {
    pub entry: Vec<WebhookEntry>,
}
