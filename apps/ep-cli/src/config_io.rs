//! Configuration files: YAML by default, JSON for `.json` paths.

use crate::error::CliResult;
use ep_sim::EpicycleConfig;
use std::path::Path;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

pub fn load_config(path: &Path) -> CliResult<EpicycleConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: EpicycleConfig = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    config.validate()?;
    Ok(config)
}

pub fn save_config(path: &Path, config: &EpicycleConfig) -> CliResult<()> {
    config.validate()?;
    std::fs::write(path, render_config(config, is_json(path))?)?;
    Ok(())
}

pub fn render_config(config: &EpicycleConfig, json: bool) -> CliResult<String> {
    Ok(if json {
        serde_json::to_string_pretty(config)?
    } else {
        serde_yaml::to_string(config)?
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use ep_sim::Preset;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ep-cli-{}-{}", std::process::id(), name))
    }

    #[test]
    fn yaml_round_trip() {
        let path = temp_path("accelerated.yaml");
        let config = EpicycleConfig::preset(Preset::Accelerated);
        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn json_round_trip() {
        let path = temp_path("canvas.json");
        let config = EpicycleConfig::preset(Preset::Canvas);
        save_config(&path, &config).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let loaded = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(text.trim_start().starts_with('{'));
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_rejects_invalid_ranges() {
        let path = temp_path("bad.yaml");
        std::fs::write(
            &path,
            "ranges:\n  count: { min: 0, max: 4 }\n  magnitude: { min: 50.0, max: 150.0 }\n  rotation_factor: { min: 0.5, max: 4.0 }\n",
        )
        .unwrap();
        let err = load_config(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, CliError::Yaml(_)), "{err}");
        assert!(err.to_string().contains("count range"));
    }
}
