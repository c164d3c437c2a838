//! Read-only lookup of emote sound profiles by name.
//!
//! The registry is injected into each dispatch; there is no process-wide
//! instance.

use std::collections::BTreeMap;

use jester_types::{EmoteKey, ProfileId, SoundId};

/// Sounds an actor plays for specific emotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmoteSounds {
    /// The profile's registry key.
    pub id: ProfileId,
    /// Sound per emote key.
    pub sounds: BTreeMap<EmoteKey, SoundId>,
}

impl EmoteSounds {
    /// The sound for `emote`, if this profile has one.
    pub fn sound_for(&self, emote: &EmoteKey) -> Option<&SoundId> {
        self.sounds.get(emote)
    }
}

/// A source of named emote sound profiles.
pub trait ProfileRegistry {
    /// Resolve `id`. Returns `None` when no profile has that name.
    fn lookup(&self, id: &ProfileId) -> Option<EmoteSounds>;
}

/// A fixed [`ProfileRegistry`] built from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticProfileRegistry {
    profiles: BTreeMap<ProfileId, BTreeMap<EmoteKey, SoundId>>,
}

impl StaticProfileRegistry {
    /// Build a registry from `profile id -> (emote -> sound)` entries.
    pub const fn new(profiles: BTreeMap<ProfileId, BTreeMap<EmoteKey, SoundId>>) -> Self {
        Self { profiles }
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profiles are registered.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileRegistry for StaticProfileRegistry {
    fn lookup(&self, id: &ProfileId) -> Option<EmoteSounds> {
        self.profiles.get(id).map(|sounds| EmoteSounds {
            id: id.clone(),
            sounds: sounds.clone(),
        })
    }
}
