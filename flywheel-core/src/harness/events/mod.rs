//! Cursor hook events
//!
//! Event structures for Cursor's hooks system. Field names use
//! snake_case to match Cursor's JSON format exactly.

mod stop;

pub use stop::StopPayload;
