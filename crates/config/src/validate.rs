//! Configuration validation, run before any connector is constructed.
//!
//! The routing core assumes a well-formed configuration and never checks
//! its own role sets at runtime, so every structural mistake has to be
//! caught here.

use std::collections::HashSet;

use crate::schema::CourierConfig;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Dotted path, e.g. `connectors.one_to_many[0].many`.
    pub path: String,
    pub message: String,
}

/// Result of validating a configuration.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Count diagnostics by severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        });
    }

    fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate `config` and report everything wrong with it at once.
pub fn validate(config: &CourierConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    if let Some(pattern) = &config.topic_pattern {
        if let Err(e) = regex::Regex::new(pattern) {
            result.error("topic_pattern", format!("invalid pattern: {e}"));
        }
    }

    if config.connectors.is_empty() {
        result.warning("connectors", "no connectors configured; nothing will relay");
    }

    for (i, c) in config.connectors.one_to_many.iter().enumerate() {
        let path = format!("connectors.one_to_many[{i}]");
        if c.one.is_empty() {
            result.error(format!("{path}.one"), "origin room id is empty");
        }
        if c.many.is_empty() {
            result.error(format!("{path}.many"), "fan-out set is empty");
        }
        if c.many.contains(&c.one) {
            result.error(
                format!("{path}.many"),
                "origin room listed in its own fan-out set",
            );
        }
        check_duplicates(&mut result, &format!("{path}.many"), &c.many);
    }

    for (i, c) in config.connectors.many_to_one.iter().enumerate() {
        let path = format!("connectors.many_to_one[{i}]");
        if c.one.is_empty() {
            result.error(format!("{path}.one"), "sink room id is empty");
        }
        if c.many.is_empty() {
            result.error(format!("{path}.many"), "source set is empty");
        }
        if c.many.contains(&c.one) {
            result.warning(
                format!("{path}.many"),
                "sink room listed among its own sources; messages from it will echo back",
            );
        }
        check_duplicates(&mut result, &format!("{path}.many"), &c.many);
    }

    for (i, c) in config.connectors.many_to_many.iter().enumerate() {
        let path = format!("connectors.many_to_many[{i}]");
        if c.many.len() < 2 {
            result.error(
                format!("{path}.many"),
                "symmetric relay needs at least two peer rooms",
            );
        }
        check_duplicates(&mut result, &format!("{path}.many"), &c.many);
    }

    result
}

fn check_duplicates(result: &mut ValidationResult, path: &str, rooms: &[String]) {
    let mut seen = HashSet::new();
    for room in rooms {
        if !seen.insert(room) {
            result.warning(path, format!("room {room} listed more than once"));
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::schema::CourierConfig};

    fn parse(raw: &str) -> CourierConfig {
        toml::from_str(raw).unwrap()
    }

    #[test]
    fn valid_config_has_no_errors() {
        let cfg = parse(
            r#"
            [[connectors.one_to_many]]
            one = "hq"
            many = ["a", "b"]
            "#,
        );
        let result = validate(&cfg);
        assert!(!result.has_errors());
    }

    #[test]
    fn empty_role_sets_are_errors() {
        let cfg = parse(
            r#"
            [[connectors.one_to_many]]
            one = "hq"
            many = []

            [[connectors.many_to_one]]
            many = []
            one = ""
            "#,
        );
        let result = validate(&cfg);
        assert_eq!(result.count(Severity::Error), 3);
    }

    #[test]
    fn origin_inside_fanout_is_an_error() {
        let cfg = parse(
            r#"
            [[connectors.one_to_many]]
            one = "hq"
            many = ["hq", "a"]
            "#,
        );
        assert!(validate(&cfg).has_errors());
    }

    #[test]
    fn lone_peer_is_an_error() {
        let cfg = parse(
            r#"
            [[connectors.many_to_many]]
            many = ["only"]
            "#,
        );
        assert!(validate(&cfg).has_errors());
    }

    #[test]
    fn bad_topic_pattern_is_an_error() {
        let cfg = parse(r#"topic_pattern = "(unclosed""#);
        assert!(validate(&cfg).has_errors());
    }

    #[test]
    fn sink_among_sources_is_a_warning_only() {
        let cfg = parse(
            r#"
            [[connectors.many_to_one]]
            many = ["hq", "a"]
            one = "hq"
            "#,
        );
        let result = validate(&cfg);
        assert!(!result.has_errors());
        assert_eq!(result.count(Severity::Warning), 1);
    }

    #[test]
    fn no_connectors_is_a_warning() {
        let result = validate(&CourierConfig::default());
        assert!(!result.has_errors());
        assert_eq!(result.count(Severity::Warning), 1);
    }
}
