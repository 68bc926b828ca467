//! Room-to-room relay core — the glue between inbound transport events and
//! outbound sends.
//!
//! Flow: inbound message → topology membership check → filter chain →
//! name resolver + message mapper → per-destination dispatch. Everything a
//! connector holds is immutable configuration, so one inbound event never
//! observes another.

pub mod connector;
pub mod filter;
pub mod mapper;
pub mod name;
pub mod topology;

pub use {
    connector::RoomConnector,
    filter::{FilterChain, FilterRule, MessagePredicate},
    mapper::{MapperPolicy, MessageMapper},
    name::NameResolver,
    topology::Topology,
};
