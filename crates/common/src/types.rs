//! Core data types for the relay: identifiers, messages, outbound items.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque stable identifier for a room (multi-member group channel).
///
/// Rooms are owned by the transport; courier only ever compares and
/// forwards these identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Opaque stable identifier for a contact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ContactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind tag of an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    Image,
    Audio,
    Video,
    Attachment,
    Emoticon,
    /// Anything the transport delivers that courier has no name for.
    Unknown,
}

impl MessageKind {
    /// Human-readable kind name, used in attribution lines for forwarded
    /// media (`"[name@room]: Image"`).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::Video => "Video",
            Self::Attachment => "Attachment",
            Self::Emoticon => "Emoticon",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One inbound chat event, immutable once constructed.
///
/// A message with no `room` is a direct message; the relay never routes
/// those. For non-text kinds the message value itself is the forwardable
/// handle — the transport knows how to re-deliver it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    /// The sending contact.
    pub talker: ContactId,
    /// The room the message arrived in, absent for direct messages.
    pub room: Option<RoomId>,
    /// Text content for `Text` messages; empty for every other kind.
    pub text: String,
}

impl Message {
    /// A text message.
    pub fn text(talker: ContactId, room: Option<RoomId>, text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Text,
            talker,
            room,
            text: text.into(),
        }
    }

    /// A non-text message (image, audio, video, ...).
    pub fn media(kind: MessageKind, talker: ContactId, room: Option<RoomId>) -> Self {
        Self {
            kind,
            talker,
            room,
            text: String::new(),
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind == MessageKind::Text
    }
}

/// One unit of outbound payload.
///
/// An ordered sequence of these is what a destination room receives for a
/// single inbound message, each item as a separate transport send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundItem {
    /// Literal text to send.
    Text(String),
    /// The original message, forwarded verbatim.
    Forward(Message),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_display() {
        for kind in [
            MessageKind::Text,
            MessageKind::Image,
            MessageKind::Audio,
            MessageKind::Video,
            MessageKind::Attachment,
            MessageKind::Emoticon,
            MessageKind::Unknown,
        ] {
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn media_messages_carry_no_text() {
        let msg = Message::media(
            MessageKind::Image,
            ContactId::new("c1"),
            Some(RoomId::new("r1")),
        );
        assert!(!msg.is_text());
        assert!(msg.text.is_empty());
    }

    #[test]
    fn ids_round_trip_through_display() {
        assert_eq!(RoomId::new("room-42").to_string(), "room-42");
        assert_eq!(ContactId::from("mike").as_str(), "mike");
    }
}
