//! Config schema types for the relay (primary room, topologies, blacklists).

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Room and contact identifiers are opaque transport-side strings; courier
/// never interprets them beyond equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourierConfig {
    /// The canonical "headquarters" room. Media forwarded from it carries
    /// no attribution line.
    pub primary_room: Option<String>,
    /// Sender ids blocked across every connector.
    pub blacklist: Vec<String>,
    /// Override for the topic short-name pattern; capture group 1 becomes
    /// the short name. Defaults to the trailing-token-group pattern.
    pub topic_pattern: Option<String>,
    pub connectors: ConnectorsConfig,
}

/// Connector instances per topology shape, any number of each.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorsConfig {
    pub one_to_many: Vec<OneToManyConfig>,
    pub many_to_one: Vec<ManyToOneConfig>,
    pub many_to_many: Vec<ManyToManyConfig>,
}

impl ConnectorsConfig {
    /// Total number of configured connector instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.one_to_many.len() + self.many_to_one.len() + self.many_to_many.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One-way relay from a single origin room into a set of fan-out rooms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OneToManyConfig {
    /// Optional label used in logs.
    pub name: Option<String>,
    /// The origin room.
    pub one: String,
    /// The fan-out rooms.
    pub many: Vec<String>,
    /// Sender ids blocked for this connector only, merged with the global
    /// blacklist.
    pub blacklist: Vec<String>,
}

/// One-way relay from a set of source rooms into a single sink room.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManyToOneConfig {
    pub name: Option<String>,
    /// The source rooms.
    pub many: Vec<String>,
    /// The sink room.
    pub one: String,
    pub blacklist: Vec<String>,
}

/// Symmetric relay between a set of peer rooms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ManyToManyConfig {
    pub name: Option<String>,
    /// The peer rooms.
    pub many: Vec<String>,
    pub blacklist: Vec<String>,
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_toml_config() {
        let cfg: CourierConfig = toml::from_str(
            r#"
            primary_room = "hq"
            blacklist = ["mike"]

            [[connectors.one_to_many]]
            name = "announcements"
            one = "hq"
            many = ["dev-1", "dev-2"]

            [[connectors.many_to_one]]
            many = ["dev-1", "dev-2"]
            one = "hq"
            blacklist = ["spammer"]

            [[connectors.many_to_many]]
            many = ["club-2019", "club-2020"]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.primary_room.as_deref(), Some("hq"));
        assert_eq!(cfg.blacklist, vec!["mike"]);
        assert_eq!(cfg.connectors.len(), 3);
        assert_eq!(
            cfg.connectors.one_to_many[0].name.as_deref(),
            Some("announcements")
        );
        assert_eq!(cfg.connectors.many_to_one[0].blacklist, vec!["spammer"]);
    }

    #[test]
    fn empty_config_defaults_to_no_connectors() {
        let cfg: CourierConfig = toml::from_str("").unwrap();
        assert!(cfg.connectors.is_empty());
        assert!(cfg.primary_room.is_none());
        assert!(cfg.topic_pattern.is_none());
    }
}
