//! Side-effect collaborators: spawning, audio, chat, and incapacitation.
//!
//! The controller only describes effects through [`EffectSink`]; it never
//! plays audio or broadcasts chat itself. [`EffectLog`] records every call
//! as an [`Effect`] and logs it, which is what the engine and the tests use.

use std::collections::BTreeMap;
use std::time::Duration;

use jester_types::{ActorId, ChatChannel, EmoteKey, LocationId, PrototypeId, SoundId};
use tracing::debug;

use crate::registry::EmoteSounds;

/// Delivery flags for an in-character message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageOptions {
    /// Skip language obfuscation for listeners who do not speak it.
    pub suppress_language: bool,
    /// Keep the message off radio relays.
    pub suppress_radio: bool,
}

/// Outbound effects requested by behavior handlers.
pub trait EffectSink {
    /// Spawn an actor from `prototype` at `location` and return its ID.
    fn spawn_actor(&mut self, prototype: &PrototypeId, location: LocationId) -> ActorId;

    /// Play `sound` positioned on `actor`.
    fn play_sound_at(&mut self, sound: &SoundId, actor: ActorId);

    /// Play the sound `profile` assigns to `emote`, if any. Returns whether
    /// a sound matched.
    fn try_play_matched_emote_sound(
        &mut self,
        actor: ActorId,
        profile: Option<&EmoteSounds>,
        emote: &EmoteKey,
    ) -> bool;

    /// Broadcast an in-character message such as "honks" from `actor`.
    fn send_expressive_message(
        &mut self,
        actor: ActorId,
        verb: &str,
        channel: ChatChannel,
        options: MessageOptions,
    );

    /// Paralyze `actor` for `duration`. With `refresh`, an existing timer is
    /// reset to `duration` instead of extended.
    fn apply_incapacitation(&mut self, actor: ActorId, duration: Duration, refresh: bool);
}

/// One recorded side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// An actor was spawned.
    Spawned {
        /// Template used.
        prototype: PrototypeId,
        /// Where it appeared.
        location: LocationId,
        /// The new actor.
        actor: ActorId,
    },
    /// A sound played on an actor.
    Sound {
        /// The sound.
        sound: SoundId,
        /// The actor it played on.
        actor: ActorId,
    },
    /// An emote sound lookup was attempted.
    EmoteSoundAttempt {
        /// The emoting actor.
        actor: ActorId,
        /// The requested emote.
        emote: EmoteKey,
        /// Whether the profile had a sound for it.
        matched: bool,
    },
    /// An in-character message was broadcast.
    Message {
        /// The speaker.
        actor: ActorId,
        /// The verb, e.g. "honks".
        verb: String,
        /// The channel.
        channel: ChatChannel,
        /// Delivery flags.
        options: MessageOptions,
    },
    /// An actor was paralyzed.
    Incapacitated {
        /// The actor.
        actor: ActorId,
        /// Requested duration.
        duration: Duration,
        /// Whether an existing timer was refreshed rather than extended.
        refresh: bool,
    },
}

/// Recording [`EffectSink`] that also tracks paralysis timers.
#[derive(Debug, Clone, Default)]
pub struct EffectLog {
    effects: Vec<Effect>,
    paralysis: BTreeMap<ActorId, Duration>,
}

impl EffectLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            effects: Vec::new(),
            paralysis: BTreeMap::new(),
        }
    }

    /// All effects recorded so far, oldest first.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Take all recorded effects, leaving the log empty. Paralysis timers
    /// are kept.
    pub fn drain(&mut self) -> Vec<Effect> {
        core::mem::take(&mut self.effects)
    }

    /// Remaining paralysis on `actor`, if any was applied.
    pub fn paralysis_remaining(&self, actor: ActorId) -> Option<Duration> {
        self.paralysis.get(&actor).copied()
    }

    /// Verbs of all recorded messages, oldest first.
    pub fn message_verbs(&self) -> Vec<&str> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Message { verb, .. } => Some(verb.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Sounds played on actors, oldest first. Emote sound matches are
    /// included.
    pub fn sounds(&self) -> Vec<&SoundId> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Sound { sound, .. } => Some(sound),
                _ => None,
            })
            .collect()
    }
}

impl EffectSink for EffectLog {
    fn spawn_actor(&mut self, prototype: &PrototypeId, location: LocationId) -> ActorId {
        let actor = ActorId::new();
        debug!(%prototype, %location, %actor, "Spawned actor");
        self.effects.push(Effect::Spawned {
            prototype: prototype.clone(),
            location,
            actor,
        });
        actor
    }

    fn play_sound_at(&mut self, sound: &SoundId, actor: ActorId) {
        debug!(%sound, %actor, "Playing sound");
        self.effects.push(Effect::Sound {
            sound: sound.clone(),
            actor,
        });
    }

    fn try_play_matched_emote_sound(
        &mut self,
        actor: ActorId,
        profile: Option<&EmoteSounds>,
        emote: &EmoteKey,
    ) -> bool {
        let sound = profile.and_then(|p| p.sound_for(emote)).cloned();
        self.effects.push(Effect::EmoteSoundAttempt {
            actor,
            emote: emote.clone(),
            matched: sound.is_some(),
        });
        match sound {
            Some(sound) => {
                self.play_sound_at(&sound, actor);
                true
            }
            None => false,
        }
    }

    fn send_expressive_message(
        &mut self,
        actor: ActorId,
        verb: &str,
        channel: ChatChannel,
        options: MessageOptions,
    ) {
        debug!(%actor, verb, ?channel, "Expressive message");
        self.effects.push(Effect::Message {
            actor,
            verb: verb.to_owned(),
            channel,
            options,
        });
    }

    fn apply_incapacitation(&mut self, actor: ActorId, duration: Duration, refresh: bool) {
        let remaining = self.paralysis.entry(actor).or_insert(Duration::ZERO);
        *remaining = if refresh {
            duration
        } else {
            remaining.saturating_add(duration)
        };
        debug!(%actor, ?duration, refresh, "Incapacitated");
        self.effects.push(Effect::Incapacitated {
            actor,
            duration,
            refresh,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_resets_instead_of_stacking() {
        let mut log = EffectLog::new();
        let actor = ActorId::new();
        log.apply_incapacitation(actor, Duration::from_secs(2), true);
        log.apply_incapacitation(actor, Duration::from_secs(2), true);
        assert_eq!(log.paralysis_remaining(actor), Some(Duration::from_secs(2)));
    }

    #[test]
    fn without_refresh_durations_stack() {
        let mut log = EffectLog::new();
        let actor = ActorId::new();
        log.apply_incapacitation(actor, Duration::from_secs(2), false);
        log.apply_incapacitation(actor, Duration::from_secs(3), false);
        assert_eq!(log.paralysis_remaining(actor), Some(Duration::from_secs(5)));
    }

    #[test]
    fn unmatched_emote_records_attempt_only() {
        let mut log = EffectLog::new();
        let actor = ActorId::new();
        assert!(!log.try_play_matched_emote_sound(actor, None, &EmoteKey::from("Laugh")));
        assert_eq!(
            log.effects(),
            &[Effect::EmoteSoundAttempt {
                actor,
                emote: EmoteKey::from("Laugh"),
                matched: false,
            }]
        );
        assert!(log.sounds().is_empty());
    }

    #[test]
    fn drain_empties_effects() {
        let mut log = EffectLog::new();
        let actor = ActorId::new();
        log.play_sound_at(&SoundId::from("/Audio/honk.ogg"), actor);
        assert_eq!(log.drain().len(), 1);
        assert!(log.effects().is_empty());
    }
}
