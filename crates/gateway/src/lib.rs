//! Bootstrap boundary: build connectors from a validated config, register
//! them, and fan each inbound transport event out to every connector as
//! independent tasks.

pub mod build;
pub mod dispatch;
pub mod registry;

pub use {
    build::build_registry,
    dispatch::{dispatch, run},
    registry::ConnectorRegistry,
};
