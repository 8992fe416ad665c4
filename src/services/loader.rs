//! Dashboard model file loading
//!
//! A model can be supplied as a JSON or YAML document instead of the
//! built-in sample. Loading always runs the full invariant check, so a
//! file that parses but breaks an invariant never reaches the renderer.

use crate::model::DashboardModel;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Load and validate a dashboard model from a `.json`, `.yml`, or
/// `.yaml` file.
pub fn load_model(path: &Path) -> Result<DashboardModel> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read model file {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let model: DashboardModel = match extension.as_str() {
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        "yml" | "yaml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        other => bail!("unsupported model file extension '{}'", other),
    };

    model
        .validate()
        .with_context(|| format!("invalid model in {}", path.display()))?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL_JSON: &str = r#"{
        "title": "T",
        "subtitle": "S",
        "footer": "F",
        "tabs": [
            {
                "id": "summary",
                "label": "Resumen",
                "sections": [
                    {
                        "heading": "Métricas",
                        "layout": {"multi_column": 2},
                        "items": [
                            {"type": "metric", "label": "Score", "value": "650", "status": "warning"}
                        ]
                    }
                ]
            }
        ]
    }"#;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json_model() {
        let path = write_temp("lending_tui_model.json", MINIMAL_JSON);
        let model = load_model(&path).unwrap();
        assert_eq!(model.tabs[0].id, "summary");
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_yaml_model() {
        let yaml = r#"
title: T
subtitle: S
footer: F
tabs:
  - id: flows
    label: Flujos
    sections: []
"#;
        let path = write_temp("lending_tui_model.yml", yaml);
        let model = load_model(&path).unwrap();
        assert_eq!(model.tabs[0].id, "flows");
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_invalid_model_file_rejected() {
        // Parses fine but carries duplicate tab ids
        let json = r#"{
            "title": "T", "subtitle": "", "footer": "",
            "tabs": [
                {"id": "a", "label": "A", "sections": []},
                {"id": "a", "label": "A2", "sections": []}
            ]
        }"#;
        let path = write_temp("lending_tui_dup.json", json);
        assert!(load_model(&path).is_err());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let path = write_temp("lending_tui_model.toml", "title = 'T'");
        assert!(load_model(&path).is_err());
        fs::remove_file(path).ok();
    }
}
