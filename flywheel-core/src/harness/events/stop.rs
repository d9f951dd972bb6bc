use serde::{Deserialize, Serialize};

/// Cursor's stop hook event
///
/// Fired when the agent loop ends. Every field is optional on the wire;
/// unknown fields are ignored. The identification fields are carried for
/// stderr diagnostics only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopPayload {
    /// Unique identifier for the conversation
    #[serde(default)]
    pub conversation_id: Option<String>,

    /// Unique identifier for this specific generation
    #[serde(default)]
    pub generation_id: Option<String>,

    /// Status of the agent loop: "completed", "aborted", or "error"
    #[serde(default)]
    pub status: String,

    /// Number of automatic continuations already granted in this
    /// conversation, maintained by Cursor
    #[serde(default)]
    pub loop_count: u64,
}
