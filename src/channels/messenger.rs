use crate::config::MessengerConfig;
use crate::error::RelayError;
use crate::types::Participant;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// One card in a generic template reply. Sequence order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyElement {
    pub title: String,
    pub subtitle: String,
    pub item_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatePayload {
    pub template_type: String,
    pub elements: Vec<ReplyElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyAttachment {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: TemplatePayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyMessage {
    pub attachment: ReplyAttachment,
}

/// Send API request body for a generic template reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    pub recipient: Participant,
    pub message: ReplyMessage,
}

/// Error body returned by the Send API on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct SendError {
    pub error: SendErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendErrorDetail {
    pub message: String,
}

/// Wraps an ordered element sequence in the envelope the Send API expects.
/// Pure construction; the caller is responsible for element count limits.
pub fn generic_template_reply(recipient_id: i64, elements: Vec<ReplyElement>) -> ReplyEnvelope {
    ReplyEnvelope {
        recipient: Participant { id: recipient_id },
        message: ReplyMessage {
            attachment: ReplyAttachment {
                kind: "template".to_string(),
                payload: TemplatePayload {
                    template_type: "generic".to_string(),
                    elements,
                },
            },
        },
    }
}

/// Delivers a reply through the Send API. The access token rides as a query
/// parameter. Non-success statuses carry the platform's own error message
/// when the body decodes; failures are terminal, the caller logs them.
pub async fn send_generic_template(
    client: &Client,
    cfg: &MessengerConfig,
    reply: &ReplyEnvelope,
) -> Result<(), RelayError> {
    let token = cfg
        .access_token
        .as_deref()
        .ok_or_else(|| RelayError::Delivery("page access token missing".to_string()))?;

    let resp = client
        .post(&cfg.send_url)
        .query(&[("access_token", token)])
        .json(reply)
        .send()
        .await
        .map_err(|err| RelayError::Delivery(err.to_string()))?;

    if resp.status().is_success() {
        return Ok(());
    }

    let status = resp.status();
    match resp.json::<SendError>().await {
        Ok(send_error) => Err(RelayError::Delivery(send_error.error.message)),
        Err(_) => Err(RelayError::Delivery(format!(
            "send endpoint returned {}",
            status
        ))),
    }
}
