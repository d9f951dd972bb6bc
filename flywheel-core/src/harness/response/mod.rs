//! Cursor stop hook responses
//!
//! Cursor's stop hook accepts a single optional field,
//! `followup_message`. Absence means "let the conversation end";
//! presence means "submit this text as the next user turn".

pub mod stop;
pub mod types;

pub use types::StopResponse;
