//! Type-safe identifiers for actors, locations, and named content.
//!
//! Runtime entities (actors, locations) get UUID v7 newtypes so they cannot
//! be mixed up at compile time. Named content that is authored in
//! configuration (sounds, emote keys, profiles, spawn prototypes) gets a
//! string newtype instead.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

/// Generates a string-backed key for content referenced by name.
macro_rules! define_key {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a key from anything string-like.
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Borrow the key as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }
    };
}

define_id! {
    /// Unique identifier for an actor in the simulation.
    ActorId
}

define_id! {
    /// Unique identifier for a location actors can stand on.
    LocationId
}

define_key! {
    /// Name of a sound resource (e.g. `/Audio/Items/bikehorn.ogg`).
    SoundId
}

define_key! {
    /// Name of an expressive action such as `Laugh` or `Giggle`.
    EmoteKey
}

define_key! {
    /// Key of an emote sound profile in the profile registry.
    ProfileId
}

define_key! {
    /// Spawn template for an actor created by another actor.
    PrototypeId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_values() {
        let a = ActorId::new();
        let b = ActorId::new();
        assert_ne!(a, b);
        assert_ne!(a.into_inner(), Uuid::nil());
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = LocationId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }

    #[test]
    fn keys_serialize_as_plain_strings() {
        let key = EmoteKey::from("Laugh");
        let json = serde_json::to_string(&key).ok();
        assert_eq!(json.as_deref(), Some("\"Laugh\""));

        let restored: Result<SoundId, _> = serde_json::from_str("\"/Audio/honk.ogg\"");
        assert_eq!(
            restored.ok().as_ref().map(SoundId::as_str),
            Some("/Audio/honk.ogg")
        );
    }
}
