//! Enumeration types shared by the behavior controller and the engine.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Life state
// ---------------------------------------------------------------------------

/// The life state of an actor as reported by the health system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeState {
    /// Conscious and able to act.
    Alive,
    /// Downed but not dead; cannot act.
    Critical,
    /// Dead.
    Dead,
}

impl LifeState {
    /// Whether the actor counts as alive for behavior purposes.
    ///
    /// Anything that is neither `Dead` nor `Critical` is alive.
    pub const fn is_alive(self) -> bool {
        !matches!(self, Self::Dead | Self::Critical)
    }

    /// Whether the actor is dead.
    pub const fn is_dead(self) -> bool {
        matches!(self, Self::Dead)
    }
}

impl core::fmt::Display for LifeState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Alive => write!(f, "alive"),
            Self::Critical => write!(f, "critical"),
            Self::Dead => write!(f, "dead"),
        }
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// A presence-only behavioral marker attached to an actor at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Periodically performs the registered auto-emote triggers.
    AutoEmote,
    /// Fades from view while moving.
    StealthOnMove,
    /// Fumbles items and trips over things.
    Clumsy,
    /// Marked for transformation into a beast.
    Transformed,
    /// Has a humanoid body and appearance.
    HumanoidAppearance,
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AutoEmote => write!(f, "auto_emote"),
            Self::StealthOnMove => write!(f, "stealth_on_move"),
            Self::Clumsy => write!(f, "clumsy"),
            Self::Transformed => write!(f, "transformed"),
            Self::HumanoidAppearance => write!(f, "humanoid_appearance"),
        }
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// In-character chat channel a message is broadcast on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatChannel {
    /// Third-person action text ("The beast honks.").
    Emote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_alive_counts_as_alive() {
        assert!(LifeState::Alive.is_alive());
        assert!(!LifeState::Critical.is_alive());
        assert!(!LifeState::Dead.is_alive());
    }

    #[test]
    fn critical_is_not_dead() {
        assert!(!LifeState::Critical.is_dead());
        assert!(LifeState::Dead.is_dead());
    }

    #[test]
    fn display_is_snake_case() {
        assert_eq!(Capability::StealthOnMove.to_string(), "stealth_on_move");
        assert_eq!(LifeState::Critical.to_string(), "critical");
    }
}
