//! The room connector: admit → filter → map → dispatch.

use tracing::{debug, warn};

use {
    courier_common::{Message, OutboundItem, RoomId},
    courier_transport::Transport,
};

use crate::{
    filter::FilterChain,
    mapper::{MapperPolicy, MessageMapper},
    name::NameResolver,
    topology::Topology,
};

/// One configured relay instance.
///
/// Holds only immutable configuration, so a connector can be shared across
/// tasks freely; every inbound message is processed independently.
#[derive(Debug)]
pub struct RoomConnector {
    topology: Topology,
    filter: FilterChain,
    mapper: MessageMapper,
}

impl RoomConnector {
    pub fn new(topology: Topology, filter: FilterChain, mapper: MessageMapper) -> Self {
        Self {
            topology,
            filter,
            mapper,
        }
    }

    /// One-way relay from `one` into each room in `many`.
    pub fn one_to_many(
        one: RoomId,
        many: Vec<RoomId>,
        primary: Option<RoomId>,
        filter: FilterChain,
        resolver: NameResolver,
    ) -> Self {
        let mapper = MessageMapper::new(resolver, MapperPolicy::Unidirectional { primary });
        Self::new(Topology::OneToMany { one, many }, filter, mapper)
    }

    /// One-way relay from each room in `many` into `one`.
    pub fn many_to_one(
        many: Vec<RoomId>,
        one: RoomId,
        primary: Option<RoomId>,
        filter: FilterChain,
        resolver: NameResolver,
    ) -> Self {
        let mapper = MessageMapper::new(resolver, MapperPolicy::Unidirectional { primary });
        Self::new(Topology::ManyToOne { many, one }, filter, mapper)
    }

    /// Symmetric relay between every room in `many`.
    pub fn many_to_many(many: Vec<RoomId>, filter: FilterChain, resolver: NameResolver) -> Self {
        let mapper = MessageMapper::new(resolver, MapperPolicy::Bidirectional);
        Self::new(Topology::ManyToMany { many }, filter, mapper)
    }

    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Process one inbound message end to end.
    ///
    /// Never fails: direct messages, unroutable origins, and filtered
    /// messages are silent no-ops; send failures are logged per destination
    /// and swallowed so the remaining sends still happen.
    pub async fn handle(&self, transport: &dyn Transport, message: &Message) {
        // Direct messages never route.
        let Some(origin) = &message.room else {
            return;
        };

        let destinations = self.topology.destinations(origin);
        if destinations.is_empty() {
            return;
        }

        if self.filter.blocks(message).await {
            debug!(
                shape = self.topology.shape(),
                talker = %message.talker,
                "message suppressed by filter chain"
            );
            return;
        }

        let items = self.mapper.map(transport, message).await;
        if items.is_empty() {
            return;
        }

        for room in &destinations {
            for item in &items {
                let result = match item {
                    OutboundItem::Text(text) => transport.send_text(room, text).await,
                    OutboundItem::Forward(original) => transport.forward(room, original).await,
                };
                if let Err(e) = result {
                    warn!(
                        shape = self.topology.shape(),
                        room = %room,
                        error = %e,
                        "relay send failed"
                    );
                }
            }
        }
    }
}
