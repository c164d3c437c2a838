//! Configuration loading for the Jester engine.
//!
//! The canonical configuration lives in `jester-config.yaml` at the project
//! root. Every section has defaults, so a partial (or missing) file works.
//! The beast profile is validated while loading: a chance outside `[0, 1]`
//! or a negative paralysis time is a load error, never a runtime one.

use std::collections::BTreeMap;
use std::path::Path;

use jester_behavior::{ActorProfile, BehaviorError, ProfileConfig, StaticProfileRegistry};
use jester_types::{EmoteKey, ProfileId, SoundId};
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The beast profile is invalid.
    #[error("invalid beast profile: {source}")]
    Profile {
        /// The underlying validation error.
        #[from]
        source: BehaviorError,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Emote sounds per profile, keyed by profile ID then emote.
pub type EmoteProfiles = BTreeMap<ProfileId, BTreeMap<EmoteKey, SoundId>>;

/// Top-level engine configuration, mirroring `jester-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JesterConfig {
    /// Encounter settings.
    #[serde(default)]
    pub world: WorldConfig,

    /// The beast's raw profile.
    #[serde(default)]
    pub beast: ProfileConfig,

    /// Emote sound profiles available to the registry.
    #[serde(default = "default_emote_profiles")]
    pub emote_profiles: EmoteProfiles,
}

impl Default for JesterConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            beast: ProfileConfig::default(),
            emote_profiles: default_emote_profiles(),
        }
    }
}

impl JesterConfig {
    /// Load and validate configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.beast_profile()?;
        Ok(config)
    }

    /// The validated beast profile.
    pub fn beast_profile(&self) -> Result<ActorProfile, BehaviorError> {
        ActorProfile::try_from(self.beast.clone())
    }

    /// A registry over the configured emote profiles.
    pub fn registry(&self) -> StaticProfileRegistry {
        StaticProfileRegistry::new(self.emote_profiles.clone())
    }
}

/// Encounter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Random seed for reproducible encounters.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of encounter rounds to run.
    #[serde(default = "default_rounds")]
    pub rounds: u32,

    /// Number of humanoid bystanders around the beast.
    #[serde(default = "default_bystanders")]
    pub bystanders: u32,

    /// Every this many rounds the beast is downed for one round (0 disables).
    #[serde(default = "default_downed_every")]
    pub downed_every: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            rounds: default_rounds(),
            bystanders: default_bystanders(),
            downed_every: default_downed_every(),
        }
    }
}

const fn default_seed() -> u64 {
    42
}

const fn default_rounds() -> u32 {
    30
}

const fn default_bystanders() -> u32 {
    4
}

const fn default_downed_every() -> u32 {
    10
}

fn default_emote_profiles() -> EmoteProfiles {
    let sounds: BTreeMap<EmoteKey, SoundId> = [
        ("Laugh", "/Audio/Voice/Beast/laugh.ogg"),
        ("Giggle", "/Audio/Voice/Beast/giggle.ogg"),
        ("Scream", "/Audio/Voice/Beast/scream.ogg"),
    ]
    .into_iter()
    .map(|(emote, sound)| (EmoteKey::from(emote), SoundId::from(sound)))
    .collect();

    let mut profiles = BTreeMap::new();
    profiles.insert(ProfileId::from("BeastEmotes"), sounds);
    profiles
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_yaml_uses_defaults() {
        let config = JesterConfig::parse("{}").unwrap();
        assert_eq!(config, JesterConfig::default());
        assert_eq!(config.world.seed, 42);
        assert_eq!(config.world.rounds, 30);
        assert!(config.emote_profiles.contains_key(&ProfileId::from("BeastEmotes")));
    }

    #[test]
    fn partial_beast_section_keeps_other_defaults() {
        let yaml = r"
beast:
  giggle_chance: 0.5
  paralyze_seconds: 4
world:
  rounds: 3
";
        let config = JesterConfig::parse(yaml).unwrap();
        assert_eq!(config.beast.giggle_chance, dec!(0.5));
        assert_eq!(config.beast.knock_chance, dec!(0.05));
        assert_eq!(config.world.rounds, 3);
        assert_eq!(config.world.bystanders, 4);

        let profile = config.beast_profile().unwrap();
        assert_eq!(profile.paralyze_duration, std::time::Duration::from_secs(4));
    }

    #[test]
    fn out_of_range_chance_fails_at_load() {
        let yaml = "beast:\n  knock_chance: 1.5\n";
        let err = JesterConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Profile { .. }));
    }

    #[test]
    fn null_emote_profile_is_kept() {
        let yaml = "beast:\n  emote_profile: ~\n";
        let config = JesterConfig::parse(yaml).unwrap();
        assert_eq!(config.beast.emote_profile, None);
    }

    #[test]
    fn custom_emote_profiles_replace_defaults() {
        let yaml = r"
emote_profiles:
  Quiet:
    Laugh: /Audio/quiet.ogg
";
        let config = JesterConfig::parse(yaml).unwrap();
        assert_eq!(config.emote_profiles.len(), 1);
        assert_eq!(config.registry().len(), 1);
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let err = JesterConfig::parse("world: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}
