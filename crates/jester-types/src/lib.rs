//! Shared type definitions for the Jester behavior controller.
//!
//! # Modules
//!
//! - [`ids`] -- UUID newtypes for runtime entities and string keys for
//!   authored content
//! - [`enums`] -- Life states, capability markers, and chat channels

pub mod enums;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use enums::{Capability, ChatChannel, LifeState};
pub use ids::{ActorId, EmoteKey, LocationId, ProfileId, PrototypeId, SoundId};
