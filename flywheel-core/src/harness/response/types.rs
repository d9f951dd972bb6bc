use serde::{Deserialize, Serialize};

/// The response structure for Cursor's stop hook
///
/// Serializes to `{}` when no follow-up is sent; `followup_message` is
/// never emitted as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StopResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followup_message: Option<String>,
}

impl StopResponse {
    /// Response that lets the conversation end.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Response that submits `message` as the next user turn.
    pub fn followup(message: impl Into<String>) -> Self {
        Self {
            followup_message: Some(message.into()),
        }
    }
}
