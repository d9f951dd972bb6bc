use crate::engine::StopDecision;

use super::types::StopResponse;

/// Build the response for Cursor's stop hook
///
/// This is the only place the `followup_message` key is produced.
pub fn build(decision: &StopDecision) -> StopResponse {
    match decision {
        StopDecision::EndTurn => StopResponse::empty(),
        StopDecision::Followup { message } => StopResponse::followup(message.clone()),
    }
}
