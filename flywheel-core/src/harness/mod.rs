//! Translation between Cursor's wire format and the decision rules

pub mod events;
pub mod response;

use crate::engine::StopDecision;
use crate::error::HookError;
use events::StopPayload;
use response::StopResponse;

/// The CursorHarness - a pure translator
pub struct CursorHarness;

impl CursorHarness {
    /// Parse the raw stop hook event from stdin
    ///
    /// Decoding is strict about field types: a payload whose `status` is
    /// not a string or whose `loop_count` is not a non-negative integer
    /// cannot be ordered by the rules, so it is a decode error. Callers
    /// resolve that to the empty response.
    pub fn parse_event(input: &str) -> Result<StopPayload, HookError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Format the response for Cursor's stop hook
    pub fn format_response(decision: &StopDecision) -> StopResponse {
        response::stop::build(decision)
    }
}
