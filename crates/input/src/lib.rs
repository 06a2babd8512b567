//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Held keys
//! arrive as terminal auto-repeat events and are treated like presses, so
//! there is no repeat timer of our own.

pub mod map;

pub use blockfall_types as types;

pub use map::{action_for_event, handle_key_event};
