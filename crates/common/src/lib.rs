//! Shared identifiers and message values used across all courier crates.

pub mod types;

pub use types::{ContactId, Message, MessageKind, OutboundItem, RoomId};
