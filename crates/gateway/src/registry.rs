use std::sync::Arc;

use courier_connector::RoomConnector;

/// Registry of all configured room connectors.
///
/// Populated once at startup; connectors are immutable afterwards, so the
/// registry hands out shared references freely.
#[derive(Debug, Default)]
pub struct ConnectorRegistry {
    connectors: Vec<Arc<RoomConnector>>,
}

impl ConnectorRegistry {
    pub fn new() -> Self {
        Self {
            connectors: Vec::new(),
        }
    }

    pub fn register(&mut self, connector: RoomConnector) {
        self.connectors.push(Arc::new(connector));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<RoomConnector>> {
        self.connectors.iter()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        courier_common::RoomId,
        courier_connector::{FilterChain, NameResolver},
    };

    #[test]
    fn registers_and_iterates() {
        let mut registry = ConnectorRegistry::new();
        assert!(registry.is_empty());

        registry.register(RoomConnector::many_to_many(
            vec![RoomId::new("a"), RoomId::new("b")],
            FilterChain::default(),
            NameResolver::default(),
        ));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().count(), 1);
    }
}
