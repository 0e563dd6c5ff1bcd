use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use hexworld_agent::AgentConfig;
use hexworld_input::KeyBindings;
use hexworld_kernel::WorldConfig;

/// Seed used when neither the command line nor the config file names one.
pub const DEFAULT_SEED: &str = "default-seed";

/// Settings loaded from an optional YAML file. Command-line flags win.
///
/// ```yaml
/// seed: my-world
/// world:
///   hex_radius: 1.0
///   initial_radius: 5
/// agent:
///   expand_range: 2
/// keys:
///   u: UpLeft
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub seed: Option<String>,
    pub world: WorldConfig,
    pub agent: AgentConfig,
    pub keys: Option<KeyBindings>,
}

impl CliConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        let hex_radius = config.world.hex_radius;
        if hex_radius.is_nan() || hex_radius <= 0.0 {
            anyhow::bail!("world.hex_radius must be positive, got {hex_radius}");
        }
        Ok(config)
    }

    /// The seed to use: the flag if given, then the file, then the default.
    pub fn seed(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.seed.clone())
            .unwrap_or_else(|| DEFAULT_SEED.to_owned())
    }

    /// Key bindings from the file, or the defaults.
    pub fn key_bindings(&self) -> KeyBindings {
        self.keys.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexworld_common::HexDirection;

    #[test]
    fn empty_file_gives_defaults() {
        let config = CliConfig::parse("{}").unwrap();
        assert_eq!(config.world, WorldConfig::default());
        assert_eq!(config.agent, AgentConfig::default());
        assert_eq!(config.seed(None), DEFAULT_SEED);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = CliConfig::parse("seed: island\nworld:\n  initial_radius: 8\n").unwrap();
        assert_eq!(config.world.initial_radius, 8);
        assert_eq!(config.world.hex_radius, 1.0);
        assert_eq!(config.seed(None), "island");
        assert_eq!(config.seed(Some("flag".into())), "flag");
    }

    #[test]
    fn custom_keys_replace_defaults() {
        let config = CliConfig::parse("keys:\n  u: UpLeft\n  o: Right\n").unwrap();
        let keys = config.key_bindings();
        assert_eq!(keys.direction_for_key('u'), Some(HexDirection::UpLeft));
        assert_eq!(keys.direction_for_key('q'), None);
    }

    #[test]
    fn rejects_bad_radius_and_unknown_fields() {
        assert!(CliConfig::parse("world:\n  hex_radius: 0\n").is_err());
        assert!(CliConfig::parse("colour: blue\n").is_err());
    }
}
