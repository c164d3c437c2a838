//! Notifications delivered through the [`EventBus`](crate::bus::EventBus).

use jester_types::{ActorId, EmoteKey, LifeState};

/// An actor was created and its controller should initialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorSpawned {
    /// The new actor.
    pub actor: ActorId,
}

/// An actor's life state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeStateChanged {
    /// The actor.
    pub actor: ActorId,
    /// State before the transition.
    pub old_state: LifeState,
    /// State after the transition.
    pub new_state: LifeState,
}

/// An actor performed an expressive action.
///
/// `handled` is shared by every handler that sees this instance; once set,
/// later handlers skip the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmoteEvent {
    /// The emoting actor.
    pub actor: ActorId,
    /// Which emote was performed.
    pub emote: EmoteKey,
    /// Whether an earlier handler already dealt with this emote.
    pub handled: bool,
}

impl EmoteEvent {
    /// A fresh, unhandled emote.
    pub const fn new(actor: ActorId, emote: EmoteKey) -> Self {
        Self {
            actor,
            emote,
            handled: false,
        }
    }
}

/// An attacker's melee swing connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeleeHit {
    /// Who swung.
    pub attacker: ActorId,
    /// Every actor the swing struck.
    pub hit: Vec<ActorId>,
}

/// Any notification the bus can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// See [`ActorSpawned`].
    Spawned(ActorSpawned),
    /// See [`LifeStateChanged`].
    LifeStateChanged(LifeStateChanged),
    /// See [`EmoteEvent`].
    Emote(EmoteEvent),
    /// See [`MeleeHit`].
    MeleeHit(MeleeHit),
}
