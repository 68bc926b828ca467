//! Static relay configuration: schema, loader, and validation.
//!
//! Courier's routing core never parses configuration itself; everything is
//! loaded and validated here before any connector is constructed.

pub mod env_subst;
pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    loader::load_config,
    schema::{
        ConnectorsConfig, CourierConfig, ManyToManyConfig, ManyToOneConfig, OneToManyConfig,
    },
};
