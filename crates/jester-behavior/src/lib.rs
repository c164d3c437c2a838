//! Reactive behavior controller for the transformable beast actor.
//!
//! The beast reacts to four notifications: its own creation, its life-state
//! transitions, its emotes, and its melee hits. Reactions are capability
//! toggles on the actor store plus randomized side effects (sounds, chat,
//! paralysis, and marking struck humanoids as transformed).
//!
//! This crate holds no I/O. Actor state, randomness, profile lookup, and
//! side effects are reached through traits so the engine (or a test) can
//! supply its own implementations.
//!
//! # Modules
//!
//! - [`bus`] -- Ordered dispatch to controllers and downstream emote listeners ([`EventBus`])
//! - [`controller`] -- The four beast handlers ([`BeastController`])
//! - [`effects`] -- Side-effect sink and its recording implementation ([`EffectLog`])
//! - [`error`] -- Error types ([`BehaviorError`])
//! - [`events`] -- Notification types
//! - [`profile`] -- Validated beast profiles and probabilities ([`ActorProfile`])
//! - [`random`] -- Bernoulli trials over a [`rand::Rng`] ([`RngSource`])
//! - [`registry`] -- Emote sound profile lookup ([`StaticProfileRegistry`])
//! - [`store`] -- Actor capability store ([`ActorTable`])

pub mod bus;
pub mod controller;
pub mod effects;
pub mod error;
pub mod events;
pub mod profile;
pub mod random;
pub mod registry;
pub mod store;

// Re-export primary types at crate root for convenience.
pub use bus::{DOWNSTREAM_ORDER, Dispatch, EmoteListener, EmoteStage, EventBus};
pub use controller::{BeastController, EmoteOutcome, GIGGLE_TRIGGER, ReactionBranch, Services};
pub use effects::{Effect, EffectLog, EffectSink, MessageOptions};
pub use error::BehaviorError;
pub use events::{ActorSpawned, EmoteEvent, LifeStateChanged, MeleeHit, Notification};
pub use profile::{ActorProfile, Probability, ProfileConfig};
pub use random::{RandomSource, RngSource};
pub use registry::{EmoteSounds, ProfileRegistry, StaticProfileRegistry};
pub use store::{ActorRecord, ActorStore, ActorTable};
