use thiserror::Error;

/// Errors at the hook payload boundary.
///
/// A stop hook must never break the agent loop, so callers map every
/// variant to the empty response; the variants exist so that mapping is
/// an explicit error-kind check rather than caught-panic control flow.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("failed to read hook event: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode hook event: {0}")]
    Decode(#[from] serde_json::Error),
}
