//! Routing topologies: who relays to whom.

use std::fmt;

use courier_common::RoomId;

/// A fixed routing shape binding rooms to roles. Immutable for the process
/// lifetime; a room may appear in several topologies in different roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topology {
    /// Messages flow from `one` into every room in `many`; never back.
    OneToMany { one: RoomId, many: Vec<RoomId> },
    /// Messages flow from every room in `many` into `one`.
    ManyToOne { many: Vec<RoomId>, one: RoomId },
    /// Every peer relays to all other peers.
    ManyToMany { many: Vec<RoomId> },
}

impl Topology {
    /// Destination rooms for a message originating in `origin`.
    ///
    /// Empty means the message is unroutable here: the origin is outside
    /// the topology, or the shape defines no flow from it. A one-to-many
    /// fan-out room never routes back through the same topology.
    pub fn destinations(&self, origin: &RoomId) -> Vec<RoomId> {
        match self {
            Self::OneToMany { one, many } if origin == one => many.clone(),
            Self::ManyToOne { many, one } if many.contains(origin) => vec![one.clone()],
            Self::ManyToMany { many } if many.contains(origin) => many
                .iter()
                .filter(|peer| *peer != origin)
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Short label for logs.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::OneToMany { .. } => "one-to-many",
            Self::ManyToOne { .. } => "many-to-one",
            Self::ManyToMany { .. } => "many-to-many",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(rooms: &[RoomId]) -> String {
            rooms
                .iter()
                .map(RoomId::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }
        match self {
            Self::OneToMany { one, many } => write!(f, "one-to-many {one} -> [{}]", list(many)),
            Self::ManyToOne { many, one } => write!(f, "many-to-one [{}] -> {one}", list(many)),
            Self::ManyToMany { many } => write!(f, "many-to-many [{}]", list(many)),
        }
    }
}
