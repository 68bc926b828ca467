use std::path::Path;

use tracing::debug;

use crate::{env_subst::substitute_env, schema::CourierConfig};

/// Load config from the given path (TOML, YAML, or JSON by extension) with
/// `${ENV_VAR}` substitution applied first.
pub fn load_config(path: &Path) -> anyhow::Result<CourierConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    debug!(path = %path.display(), "loading relay config");
    parse_config(&raw, path)
}

/// Parse raw config text; the path only selects the format.
pub fn parse_config(raw: &str, path: &Path) -> anyhow::Result<CourierConfig> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("toml")
        .to_ascii_lowercase();
    let cfg = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(raw)
            .map_err(|e| anyhow::anyhow!("invalid YAML in {}: {e}", path.display()))?,
        "json" => serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("invalid JSON in {}: {e}", path.display()))?,
        _ => toml::from_str(raw)
            .map_err(|e| anyhow::anyhow!("invalid TOML in {}: {e}", path.display()))?,
    };
    Ok(cfg)
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use {super::*, std::path::PathBuf};

    #[test]
    fn parses_by_extension() {
        let toml_cfg = parse_config(
            "primary_room = \"hq\"",
            &PathBuf::from("courier.toml"),
        )
        .unwrap();
        assert_eq!(toml_cfg.primary_room.as_deref(), Some("hq"));

        let yaml_cfg = parse_config("primary_room: hq", &PathBuf::from("courier.yaml")).unwrap();
        assert_eq!(yaml_cfg.primary_room.as_deref(), Some("hq"));

        let json_cfg = parse_config(
            r#"{"primary_room": "hq"}"#,
            &PathBuf::from("courier.json"),
        )
        .unwrap();
        assert_eq!(json_cfg.primary_room.as_deref(), Some("hq"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_config("not = [toml", &PathBuf::from("courier.toml")).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config(&PathBuf::from("/nonexistent/courier.toml")).is_err());
    }
}
