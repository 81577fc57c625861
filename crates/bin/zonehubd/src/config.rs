//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `zonehub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use zonehub_domain::activation::ActivationRequest;
use zonehub_domain::error::ZonehubError;
use zonehub_domain::scene::Scene;
use zonehub_domain::volume::Volume;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Sequencer tuning.
    pub sequencer: SequencerConfig,
    /// Only run the scene with this name (all enabled scenes otherwise).
    pub scene: Option<String>,
    /// Activation presets.
    pub scenes: Vec<SceneConfig>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Sequencer tuning.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Pause between the prepare and commit passes, in milliseconds.
    pub settle_ms: u64,
}

/// One activation preset.
#[derive(Debug, Deserialize)]
pub struct SceneConfig {
    /// Scene name, used for selection and logging.
    pub name: String,
    /// Source input to bind the stream to.
    pub source: String,
    /// Stream to play.
    pub stream: String,
    /// Zones to activate, in order.
    #[serde(default)]
    pub zones: Vec<String>,
    /// Level applied to every zone in the scene.
    #[serde(default)]
    pub volume: Volume,
    /// Disabled scenes are kept but skipped.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl SceneConfig {
    /// Convert into a validated domain [`Scene`].
    ///
    /// # Errors
    ///
    /// Returns a validation error when the scene name, references, or zone
    /// list violate domain invariants.
    pub fn to_scene(&self) -> Result<Scene, ZonehubError> {
        let mut request = ActivationRequest::builder()
            .source(self.source.as_str())
            .stream(self.stream.as_str());
        for zone in &self.zones {
            request = request.zone(zone.as_str(), self.volume);
        }
        Scene::builder()
            .name(self.name.as_str())
            .enabled(self.enabled)
            .request(request.build()?)
            .build()
    }
}

impl Config {
    /// Load configuration from `zonehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("zonehub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ZONEHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("ZONEHUB_SCENE") {
            self.scene = Some(val);
        }
        if let Ok(val) = std::env::var("ZONEHUB_SETTLE_MS") {
            if let Ok(ms) = val.parse() {
                self.sequencer.settle_ms = ms;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (index, scene) in self.scenes.iter().enumerate() {
            if scene.name.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "scene #{index} has an empty name"
                )));
            }
            if self.scenes[..index].iter().any(|s| s.name == scene.name) {
                return Err(ConfigError::Validation(format!(
                    "scene name `{}` is used more than once",
                    scene.name
                )));
            }
        }
        if let Some(selected) = &self.scene {
            if !self.scenes.iter().any(|s| &s.name == selected) {
                return Err(ConfigError::Validation(format!(
                    "selected scene `{selected}` is not configured"
                )));
            }
        }
        Ok(())
    }

    /// The settle delay between the sequencer's two passes.
    #[must_use]
    pub fn settle(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.sequencer.settle_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "zonehubd=info,zonehub=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "zonehubd=info,zonehub=info");
        assert_eq!(config.sequencer.settle_ms, 0);
        assert!(config.scene.is_none());
        assert!(config.scenes.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.scenes.is_empty());
        assert_eq!(config.sequencer.settle_ms, 0);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [sequencer]
            settle_ms = 250

            [[scenes]]
            name = 'morning'
            source = 'source_1'
            stream = 'spotify'
            zones = ['kitchen', 'living_room']
            volume = 0.4

            [[scenes]]
            name = 'night'
            source = 'source_2'
            stream = 'radio'
            enabled = false
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.sequencer.settle_ms, 250);
        assert_eq!(config.scenes.len(), 2);
        assert_eq!(config.scenes[0].zones, ["kitchen", "living_room"]);
        assert_eq!(config.scenes[0].volume.value(), 0.4);
        assert!(!config.scenes[1].enabled);
        assert!(config.scenes[1].zones.is_empty());
    }

    #[test]
    fn should_default_scene_volume_to_half_scale() {
        let toml = "
            [[scenes]]
            name = 'morning'
            source = 'source_1'
            stream = 'spotify'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.scenes[0].volume, Volume::DEFAULT);
    }

    #[test]
    fn should_reject_out_of_range_scene_volume() {
        let toml = "
            [[scenes]]
            name = 'loud'
            source = 'source_1'
            stream = 'spotify'
            volume = 1.5
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert!(config.scenes.is_empty());
    }

    #[test]
    fn should_reject_duplicate_scene_names() {
        let toml = "
            [[scenes]]
            name = 'morning'
            source = 'source_1'
            stream = 'spotify'

            [[scenes]]
            name = 'morning'
            source = 'source_2'
            stream = 'radio'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_unknown_selected_scene() {
        let toml = "
            scene = 'party'

            [[scenes]]
            name = 'morning'
            source = 'source_1'
            stream = 'spotify'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_accept_valid_config() {
        let toml = "
            scene = 'morning'

            [[scenes]]
            name = 'morning'
            source = 'source_1'
            stream = 'spotify'
            zones = ['kitchen']
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_convert_scene_config_to_domain_scene() {
        let toml = "
            [[scenes]]
            name = 'morning'
            source = 'source_1'
            stream = 'spotify'
            zones = ['kitchen', 'living_room']
            volume = 0.4
        ";
        let config: Config = toml::from_str(toml).unwrap();
        let scene = config.scenes[0].to_scene().unwrap();
        assert_eq!(scene.name, "morning");
        assert!(scene.enabled);
        assert_eq!(scene.request.zones.len(), 2);
        assert!(
            scene
                .request
                .zones
                .iter()
                .all(|t| t.volume.value() == 0.4)
        );
    }

    #[test]
    fn should_fail_scene_conversion_when_zone_is_duplicated() {
        let toml = "
            [[scenes]]
            name = 'morning'
            source = 'source_1'
            stream = 'spotify'
            zones = ['kitchen', 'kitchen']
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.scenes[0].to_scene().is_err());
    }

    #[test]
    fn should_compute_settle_duration_from_millis() {
        let mut config = Config::default();
        config.sequencer.settle_ms = 250;
        assert_eq!(config.settle(), std::time::Duration::from_millis(250));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
