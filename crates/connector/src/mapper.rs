//! Message mapping: one admitted message → the ordered outbound items every
//! destination room receives.

use {
    courier_common::{Message, MessageKind, OutboundItem, RoomId},
    courier_transport::TransportRead,
};

use crate::name::{NOWHERE, NameResolver};

/// Which mapping policy a connector applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapperPolicy {
    /// One-way relay: text gets an attribution prefix, media is forwarded
    /// verbatim with a leading attribution line unless it originated in the
    /// primary ("headquarters") room.
    Unidirectional { primary: Option<RoomId> },
    /// Symmetric relay: quoted text only; media is dropped so it is not
    /// duplicated across every peer.
    Bidirectional,
}

/// Maps an admitted message to outbound items. Performs no sends.
#[derive(Debug, Clone)]
pub struct MessageMapper {
    resolver: NameResolver,
    policy: MapperPolicy,
}

impl MessageMapper {
    pub fn new(resolver: NameResolver, policy: MapperPolicy) -> Self {
        Self { resolver, policy }
    }

    /// Produce the ordered outbound items for `message`.
    ///
    /// Pure aside from the name lookups: identical lookup results yield an
    /// identical sequence. Empty means "relay nothing".
    pub async fn map(&self, transport: &dyn TransportRead, message: &Message) -> Vec<OutboundItem> {
        if self.policy == MapperPolicy::Bidirectional && !message.is_text() {
            return Vec::new();
        }

        let sender = self.resolver.sender_display_name(transport, message).await;
        let room = self
            .resolver
            .room_short_name(transport, message)
            .await
            .unwrap_or_else(|| NOWHERE.to_string());
        let prefix = format!("[{sender}@{room}]");

        if message.is_text() {
            return vec![OutboundItem::Text(format!("{prefix}: {}", message.text))];
        }

        // Non-text, one-way relay: forward the original. Media from anywhere
        // but the primary room carries a leading attribution line.
        let mut items = vec![OutboundItem::Forward(message.clone())];
        let from_primary = match (&self.policy, &message.room) {
            (MapperPolicy::Unidirectional { primary: Some(p) }, Some(origin)) => p == origin,
            _ => false,
        };
        if !from_primary {
            items.insert(
                0,
                OutboundItem::Text(format!("{prefix}: {}", message.kind.name())),
            );
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        courier_common::ContactId,
        courier_transport::InMemoryTransport,
    };

    fn seeded_transport(room: &RoomId, talker: &ContactId) -> InMemoryTransport {
        let transport = InMemoryTransport::new();
        transport.set_topic(room.clone(), "Wechaty Developers' Home 8");
        transport.set_alias(room.clone(), talker.clone(), "huan");
        transport
    }

    fn unidirectional(primary: Option<RoomId>) -> MessageMapper {
        MessageMapper::new(
            NameResolver::default(),
            MapperPolicy::Unidirectional { primary },
        )
    }

    #[tokio::test]
    async fn text_gets_single_prefixed_item() {
        let room = RoomId::new("r1");
        let talker = ContactId::new("c1");
        let transport = seeded_transport(&room, &talker);
        let message = Message::text(talker, Some(room), "hello world");

        let items = unidirectional(None).map(&transport, &message).await;
        assert_eq!(
            items,
            vec![OutboundItem::Text("[huan@Home 8]: hello world".into())]
        );
    }

    #[tokio::test]
    async fn media_from_non_primary_room_carries_attribution_line() {
        let room = RoomId::new("satellite");
        let talker = ContactId::new("c1");
        let transport = seeded_transport(&room, &talker);
        let message = Message::media(MessageKind::Image, talker, Some(room.clone()));

        let mapper = unidirectional(Some(RoomId::new("hq")));
        let items = mapper.map(&transport, &message).await;
        assert_eq!(
            items,
            vec![
                OutboundItem::Text("[huan@Home 8]: Image".into()),
                OutboundItem::Forward(message),
            ]
        );
    }

    #[tokio::test]
    async fn media_from_primary_room_passes_unadorned() {
        let room = RoomId::new("hq");
        let talker = ContactId::new("c1");
        let transport = seeded_transport(&room, &talker);
        let message = Message::media(MessageKind::Video, talker, Some(room.clone()));

        let mapper = unidirectional(Some(room));
        let items = mapper.map(&transport, &message).await;
        assert_eq!(items, vec![OutboundItem::Forward(message)]);
    }

    #[tokio::test]
    async fn bidirectional_drops_media() {
        let room = RoomId::new("peer-a");
        let talker = ContactId::new("c1");
        let transport = seeded_transport(&room, &talker);
        let mapper = MessageMapper::new(NameResolver::default(), MapperPolicy::Bidirectional);

        for kind in [
            MessageKind::Image,
            MessageKind::Audio,
            MessageKind::Video,
            MessageKind::Attachment,
            MessageKind::Emoticon,
            MessageKind::Unknown,
        ] {
            let message = Message::media(kind, talker.clone(), Some(room.clone()));
            assert!(mapper.map(&transport, &message).await.is_empty());
        }
    }

    #[tokio::test]
    async fn bidirectional_prefixes_text() {
        let room = RoomId::new("peer-a");
        let talker = ContactId::new("c1");
        let transport = seeded_transport(&room, &talker);
        let message = Message::text(talker, Some(room), "ship it");

        let mapper = MessageMapper::new(NameResolver::default(), MapperPolicy::Bidirectional);
        let items = mapper.map(&transport, &message).await;
        assert_eq!(
            items,
            vec![OutboundItem::Text("[huan@Home 8]: ship it".into())]
        );
    }

    #[tokio::test]
    async fn missing_lookups_degrade_to_fallbacks() {
        let transport = InMemoryTransport::new();
        let message = Message::text(
            ContactId::new("ghost"),
            Some(RoomId::new("untitled")),
            "boo",
        );

        let items = unidirectional(None).map(&transport, &message).await;
        assert_eq!(
            items,
            vec![OutboundItem::Text("[Noname@Nowhere]: boo".into())]
        );
    }

    #[tokio::test]
    async fn mapping_is_idempotent_given_identical_lookups() {
        let room = RoomId::new("r1");
        let talker = ContactId::new("c1");
        let transport = seeded_transport(&room, &talker);
        let message = Message::text(talker, Some(room), "same again");
        let mapper = unidirectional(None);

        let first = mapper.map(&transport, &message).await;
        let second = mapper.map(&transport, &message).await;
        assert_eq!(first, second);
    }
}
