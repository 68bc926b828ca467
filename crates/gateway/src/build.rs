//! Construct connectors from a validated configuration.

use {
    anyhow::{Result, bail},
    tracing::info,
};

use {
    courier_common::{ContactId, RoomId},
    courier_config::CourierConfig,
    courier_connector::{FilterChain, NameResolver, RoomConnector},
};

use crate::registry::ConnectorRegistry;

/// Build the connector registry from `config`.
///
/// Validation runs first; any validation error aborts construction, so a
/// registry that comes back `Ok` is safe to route through.
pub fn build_registry(config: &CourierConfig) -> Result<ConnectorRegistry> {
    let report = courier_config::validate::validate(config);
    if report.has_errors() {
        let messages: Vec<String> = report
            .diagnostics
            .iter()
            .filter(|d| d.severity == courier_config::validate::Severity::Error)
            .map(|d| format!("{}: {}", d.path, d.message))
            .collect();
        bail!("invalid relay configuration: {}", messages.join("; "));
    }

    let resolver = match &config.topic_pattern {
        Some(pattern) => NameResolver::with_pattern(pattern)?,
        None => NameResolver::default(),
    };
    let primary = config.primary_room.as_deref().map(RoomId::from);

    let mut registry = ConnectorRegistry::new();

    for c in &config.connectors.one_to_many {
        let connector = RoomConnector::one_to_many(
            RoomId::from(c.one.as_str()),
            room_ids(&c.many),
            primary.clone(),
            filter_for(config, &c.blacklist),
            resolver.clone(),
        );
        info!(
            name = c.name.as_deref().unwrap_or("unnamed"),
            topology = %connector.topology(),
            "registering connector"
        );
        registry.register(connector);
    }

    for c in &config.connectors.many_to_one {
        let connector = RoomConnector::many_to_one(
            room_ids(&c.many),
            RoomId::from(c.one.as_str()),
            primary.clone(),
            filter_for(config, &c.blacklist),
            resolver.clone(),
        );
        info!(
            name = c.name.as_deref().unwrap_or("unnamed"),
            topology = %connector.topology(),
            "registering connector"
        );
        registry.register(connector);
    }

    for c in &config.connectors.many_to_many {
        let connector = RoomConnector::many_to_many(
            room_ids(&c.many),
            filter_for(config, &c.blacklist),
            resolver.clone(),
        );
        info!(
            name = c.name.as_deref().unwrap_or("unnamed"),
            topology = %connector.topology(),
            "registering connector"
        );
        registry.register(connector);
    }

    Ok(registry)
}

fn room_ids(ids: &[String]) -> Vec<RoomId> {
    ids.iter().map(|id| RoomId::from(id.as_str())).collect()
}

/// Global blacklist merged with a connector's own entries.
fn filter_for(config: &CourierConfig, extra: &[String]) -> FilterChain {
    FilterChain::senders(
        config
            .blacklist
            .iter()
            .chain(extra)
            .map(|id| ContactId::from(id.as_str())),
    )
}
