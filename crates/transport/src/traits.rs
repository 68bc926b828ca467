use async_trait::async_trait;

use courier_common::{ContactId, Message, RoomId};

use crate::Result;

/// Read-only lookups against transport-owned state.
///
/// Every lookup may legitimately come back empty — rooms without a topic,
/// contacts without a display name, members without a room alias. Callers
/// degrade to fallback values rather than treating absence as an error.
#[async_trait]
pub trait TransportRead: Send + Sync {
    /// The room's human-set topic, if it has one.
    async fn room_topic(&self, room: &RoomId) -> Result<Option<String>>;

    /// The room-scoped alias the room defines for a member, if any.
    async fn room_alias(&self, room: &RoomId, contact: &ContactId) -> Result<Option<String>>;

    /// The contact's global display name, if known.
    async fn contact_name(&self, contact: &ContactId) -> Result<Option<String>>;
}

/// Outbound sends into a room.
#[async_trait]
pub trait TransportSend: Send + Sync {
    /// Send a literal text message to `room`.
    async fn send_text(&self, room: &RoomId, text: &str) -> Result<()>;

    /// Re-deliver `message` verbatim into `room`.
    async fn forward(&self, room: &RoomId, message: &Message) -> Result<()>;
}

/// Full transport boundary: lookups plus sends.
pub trait Transport: TransportRead + TransportSend {}

impl<T: TransportRead + TransportSend> Transport for T {}
