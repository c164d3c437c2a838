//! The beast controller: one instance per beast actor.
//!
//! The four handlers live in their own files and share no state with each
//! other beyond the controller's immutable profile and the emote sounds
//! resolved at spawn. Everything else they read or write goes through the
//! [`Services`] passed in for the current dispatch.
//!
//! - [`lifecycle`] -- capability toggling on life-state transitions
//! - [`spawn`] -- one-time setup when the beast is created
//! - [`emote`] -- matched emote sounds and the honk/fall rolls
//! - [`melee`] -- marking struck humanoids as transformed

pub mod emote;
pub mod lifecycle;
pub mod melee;
pub mod spawn;

use jester_types::{ActorId, Capability, EmoteKey};

use crate::effects::EffectSink;
use crate::profile::ActorProfile;
use crate::random::RandomSource;
use crate::registry::{EmoteSounds, ProfileRegistry};
use crate::store::ActorStore;

pub use emote::{EmoteOutcome, ReactionBranch};

/// Auto-emote trigger registered while the beast is alive.
pub const GIGGLE_TRIGGER: &str = "Giggle";

/// Collaborators available to a handler for one dispatch.
pub struct Services<'a> {
    /// Actor and capability state.
    pub actors: &'a mut dyn ActorStore,
    /// Emote sound profiles.
    pub registry: &'a dyn ProfileRegistry,
    /// Chance rolls.
    pub random: &'a mut dyn RandomSource,
    /// Audio, chat, spawning, and incapacitation.
    pub effects: &'a mut dyn EffectSink,
}

impl core::fmt::Debug for Services<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// Behavior controller bound to a single beast actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeastController {
    actor: ActorId,
    profile: ActorProfile,
    emote_sounds: Option<EmoteSounds>,
    spawned: bool,
}

impl BeastController {
    /// Bind `profile` to `actor`. Emote sounds stay unresolved until
    /// [`on_spawned`](Self::on_spawned) runs.
    pub const fn new(actor: ActorId, profile: ActorProfile) -> Self {
        Self {
            actor,
            profile,
            emote_sounds: None,
            spawned: false,
        }
    }

    /// The controlled actor.
    pub const fn actor(&self) -> ActorId {
        self.actor
    }

    /// The beast's profile.
    pub const fn profile(&self) -> &ActorProfile {
        &self.profile
    }

    /// Whether spawn setup has already run.
    pub const fn is_spawned(&self) -> bool {
        self.spawned
    }

    /// Emote sounds resolved at spawn, if any.
    pub const fn emote_sounds(&self) -> Option<&EmoteSounds> {
        self.emote_sounds.as_ref()
    }
}

/// Ensure the auto-emote capability and register the giggle trigger.
fn grant_auto_emote(actors: &mut dyn ActorStore, actor: ActorId) {
    actors.ensure(actor, Capability::AutoEmote);
    actors.register_auto_emote(actor, EmoteKey::from(GIGGLE_TRIGGER));
}
