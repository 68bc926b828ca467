//! Boundary with the external chat transport.
//!
//! The transport owns rooms, contacts, and actual message delivery. Courier
//! only reads identity data through [`TransportRead`] and emits sends
//! through [`TransportSend`]; session management, login, and event delivery
//! stay on the transport's side of the line.

pub mod error;
pub mod memory;
pub mod traits;

pub use {
    error::{Error, Result},
    memory::InMemoryTransport,
    traits::{Transport, TransportRead, TransportSend},
};
