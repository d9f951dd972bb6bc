//! Stop hook decision rules
//!
//! Two ordered checks decide whether the agent keeps working after its
//! turn ends: an explicit user abort suppresses any follow-up, and
//! Cursor's ceiling on automatic continuations forces a clean hand-off.
//! Every other outcome keeps the loop going.

pub mod decision;

pub use decision::StopDecision;

use crate::harness::events::StopPayload;
use tracing::debug;

/// Status tag Cursor reports when the user explicitly stopped the agent.
pub const STATUS_ABORTED: &str = "aborted";

/// Cursor allows at most 5 automatic follow-ups per conversation; the
/// platform rejects requests beyond that.
pub const MAX_AUTO_CONTINUATIONS: u64 = 5;

/// Instruction injected while the conversation is under the ceiling.
pub const CONTINUE_MESSAGE: &str = "Fully autonomous: do not ask for confirmation. \
    If you have uncommitted changes: run cargo build and cargo test if Rust changed, \
    then git add, git commit with a clear message, and git push. \
    Then continue with the next unchecked item in .tasks (see .tasks/README.md). \
    If all tasks in the current file are done, move to the next task file in order.";

/// Hand-off instruction for the final allowed follow-up.
pub const LIMIT_MESSAGE: &str = "Auto-continuation limit reached (Cursor allows 5 per conversation). \
    Briefly summarize what was completed and what is next in .tasks, then stop.";

/// Apply the stop rules to a decoded payload.
///
/// An abort always wins. The ceiling check only applies to non-aborted
/// turns; "completed", "error", and unset statuses all keep going.
pub fn evaluate(payload: &StopPayload) -> StopDecision {
    if payload.status == STATUS_ABORTED {
        debug!(
            conversation_id = payload.conversation_id.as_deref(),
            "user aborted, suppressing follow-up"
        );
        return StopDecision::EndTurn;
    }

    if payload.loop_count >= MAX_AUTO_CONTINUATIONS {
        debug!(
            loop_count = payload.loop_count,
            "continuation ceiling reached, handing off"
        );
        return StopDecision::followup(LIMIT_MESSAGE);
    }

    StopDecision::followup(CONTINUE_MESSAGE)
}
