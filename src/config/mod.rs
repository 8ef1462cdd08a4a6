// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the enharmonic command-line tool.
//!
//! Settings are read from a YAML file. Every field has a default, so an
//! empty file (or no file at all) is a valid configuration.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::generators::ScaleRegistry;
use crate::music::pitch::validate_note;
use crate::music::scale::{CustomScaleDefinition, ScaleKind};

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Key used when none is given (e.g., "C", "Bb", "F#")
    #[serde(default = "default_key")]
    pub default_key: String,
    /// Scale used when none is given
    #[serde(default = "default_scale")]
    pub default_scale: ScaleKind,
    /// Log level: error, warn, info, debug or trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Show a degree row above each scale table
    #[serde(default = "default_show_degrees")]
    pub show_degrees: bool,
    /// User-defined scale formulas
    #[serde(default)]
    pub custom_scales: Vec<CustomScaleDefinition>,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_scale() -> ScaleKind {
    ScaleKind::Major
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_show_degrees() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_key: default_key(),
            default_scale: default_scale(),
            log_level: default_log_level(),
            show_degrees: default_show_degrees(),
            custom_scales: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check the default key, log level and every custom formula
    pub fn validate(&self) -> Result<()> {
        validate_note(&self.default_key).context("Invalid default_key")?;
        self.level()?;
        for def in &self.custom_scales {
            def.steps()
                .with_context(|| format!("Invalid custom scale '{}'", def.name))?;
        }
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| anyhow!("Invalid log_level: {}", self.log_level))
    }

    /// Registry holding the configured custom scales
    pub fn registry(&self) -> Result<ScaleRegistry> {
        let mut registry = ScaleRegistry::new();
        for def in &self.custom_scales {
            registry
                .register(def.clone())
                .with_context(|| format!("Invalid custom scale '{}'", def.name))?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::scale::SpellingFamily;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
default_key: "Bb"
default_scale: harmonic_minor
log_level: debug
show_degrees: false
custom_scales:
  - name: dorian
    formula: WHWWWHW
    family: minor
  - name: major_pentatonic
    formula: "W W T W T"
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_key, "Bb");
        assert_eq!(config.default_scale, ScaleKind::HarmonicMinor);
        assert_eq!(config.level().unwrap(), Level::DEBUG);
        assert!(!config.show_degrees);
        assert_eq!(config.custom_scales.len(), 2);
        assert_eq!(config.custom_scales[0].family, SpellingFamily::Minor);
        assert_eq!(config.custom_scales[1].family, SpellingFamily::Major);
    }

    #[test]
    fn test_default_values() {
        let config = AppConfig::from_yaml("log_level: info").unwrap();
        assert_eq!(config.default_key, "C");
        assert_eq!(config.default_scale, ScaleKind::Major);
        assert!(config.show_degrees);
        assert!(config.custom_scales.is_empty());

        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let err = AppConfig::from_yaml("default_key: H").unwrap_err();
        assert!(err.to_string().contains("default_key"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(AppConfig::from_yaml("log_level: loud").is_err());
    }

    #[test]
    fn test_invalid_formula_rejected() {
        let yaml = r#"
custom_scales:
  - name: broken
    formula: WWX
"#;
        let err = AppConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_unknown_scale_kind_rejected() {
        assert!(AppConfig::from_yaml("default_scale: lydian").is_err());
    }

    #[test]
    fn test_registry() {
        let yaml = r#"
custom_scales:
  - name: mixolydian
    formula: WWHWWHW
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        let registry = config.registry().unwrap();
        let scale = registry.get_scale("D", "mixolydian").unwrap().unwrap();
        assert_eq!(scale.notes(), ["D", "E", "F#", "G", "A", "B", "C", "D"]);
    }

    #[test]
    fn test_round_trip() {
        let mut config = AppConfig::default();
        config.default_key = "F#".to_string();
        config.default_scale = ScaleKind::MelodicMinor;

        let yaml = config.to_yaml().unwrap();
        let parsed = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enharmonic.yaml");

        let mut config = AppConfig::default();
        config.show_degrees = false;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        assert!(AppConfig::load(dir.path().join("missing.yaml")).is_err());
    }
}
