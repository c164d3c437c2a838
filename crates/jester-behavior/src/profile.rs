//! Beast profiles: the tunable chances, durations, and resource names that
//! configure one beast.
//!
//! [`ProfileConfig`] is the raw shape read from configuration. It is
//! validated once into an [`ActorProfile`] before any controller is built;
//! an out-of-range chance or a negative duration is rejected there, so the
//! handlers never see an invalid profile.

use std::time::Duration;

use jester_types::{ProfileId, PrototypeId, SoundId};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

use crate::error::BehaviorError;

/// A chance in `[0, 1]`, stored as an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Probability(Decimal);

impl Probability {
    /// A chance that never succeeds.
    pub const NEVER: Self = Self(Decimal::ZERO);

    /// A chance that always succeeds.
    pub const ALWAYS: Self = Self(Decimal::ONE);

    /// Validate `value` as a probability.
    ///
    /// `field` names the profile field for the error message.
    pub fn new(field: &'static str, value: Decimal) -> Result<Self, BehaviorError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(BehaviorError::ProbabilityOutOfRange { field, value });
        }
        Ok(Self(value))
    }

    /// The underlying decimal value.
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// The chance as an exact fraction `(numerator, denominator)`.
    ///
    /// The denominator is `10^scale` of the decimal, so a roll in
    /// `0..denominator` that lands strictly below the numerator succeeds
    /// with exactly this chance at every precision the decimal can hold.
    pub fn fraction(self) -> (u128, u128) {
        let numerator = u128::try_from(self.0.mantissa()).unwrap_or(0);
        let denominator = 10_u128.checked_pow(self.0.scale()).unwrap_or(u128::MAX);
        (numerator, denominator)
    }
}

impl core::fmt::Display for Probability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw beast profile as written in `jester-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileConfig {
    /// Chance per emote to honk (default: 0.2).
    #[serde(default = "default_giggle_chance")]
    pub giggle_chance: Decimal,

    /// Chance per emote, when no honk happened, to fall over (default: 0.05).
    #[serde(default = "default_knock_chance")]
    pub knock_chance: Decimal,

    /// Chance per melee hit to mark a humanoid victim (default: 0.1).
    #[serde(default = "default_infection_chance")]
    pub infection_chance: Decimal,

    /// How long a fall paralyzes the beast, in seconds (default: 2).
    #[serde(default = "default_paralyze_seconds")]
    pub paralyze_seconds: Decimal,

    /// Sound played on a honk.
    #[serde(default = "default_spawn_sound")]
    pub spawn_sound: SoundId,

    /// Sound played on a fall.
    #[serde(default = "default_knock_sound")]
    pub knock_sound: SoundId,

    /// Emote sound profile to resolve at spawn. `null` disables the
    /// spawn-time setup entirely.
    #[serde(default = "default_emote_profile")]
    pub emote_profile: Option<ProfileId>,

    /// Template of the companion effect spawned next to a new beast.
    #[serde(default = "default_companion_spawn")]
    pub companion_spawn: PrototypeId,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            giggle_chance: default_giggle_chance(),
            knock_chance: default_knock_chance(),
            infection_chance: default_infection_chance(),
            paralyze_seconds: default_paralyze_seconds(),
            spawn_sound: default_spawn_sound(),
            knock_sound: default_knock_sound(),
            emote_profile: default_emote_profile(),
            companion_spawn: default_companion_spawn(),
        }
    }
}

fn default_giggle_chance() -> Decimal {
    Decimal::new(2, 1)
}

fn default_knock_chance() -> Decimal {
    Decimal::new(5, 2)
}

fn default_infection_chance() -> Decimal {
    Decimal::new(1, 1)
}

fn default_paralyze_seconds() -> Decimal {
    Decimal::from(2)
}

fn default_spawn_sound() -> SoundId {
    SoundId::from("/Audio/Items/bikehorn.ogg")
}

fn default_knock_sound() -> SoundId {
    SoundId::from("/Audio/Effects/slip.ogg")
}

#[allow(clippy::unnecessary_wraps)]
fn default_emote_profile() -> Option<ProfileId> {
    Some(ProfileId::from("BeastEmotes"))
}

fn default_companion_spawn() -> PrototypeId {
    PrototypeId::from("EffectBluespaceFlash")
}

/// A validated, immutable beast profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorProfile {
    /// Chance per emote to honk.
    pub giggle_chance: Probability,
    /// Chance per emote, after a failed honk roll, to fall over.
    pub knock_chance: Probability,
    /// Chance per eligible melee victim to be marked transformed.
    pub infection_chance: Probability,
    /// Paralysis applied on a fall.
    pub paralyze_duration: Duration,
    /// Sound played on a honk.
    pub spawn_sound: SoundId,
    /// Sound played on a fall.
    pub knock_sound: SoundId,
    /// Emote sound profile to resolve at spawn.
    pub emote_profile: Option<ProfileId>,
    /// Template of the companion spawned next to a new beast.
    pub companion_spawn: PrototypeId,
}

impl TryFrom<ProfileConfig> for ActorProfile {
    type Error = BehaviorError;

    fn try_from(raw: ProfileConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            giggle_chance: Probability::new("giggle_chance", raw.giggle_chance)?,
            knock_chance: Probability::new("knock_chance", raw.knock_chance)?,
            infection_chance: Probability::new("infection_chance", raw.infection_chance)?,
            paralyze_duration: seconds_to_duration("paralyze_seconds", raw.paralyze_seconds)?,
            spawn_sound: raw.spawn_sound,
            knock_sound: raw.knock_sound,
            emote_profile: raw.emote_profile,
            companion_spawn: raw.companion_spawn,
        })
    }
}

/// Convert decimal seconds to a [`Duration`] with millisecond precision.
fn seconds_to_duration(field: &'static str, seconds: Decimal) -> Result<Duration, BehaviorError> {
    if seconds < Decimal::ZERO {
        return Err(BehaviorError::InvalidDuration { field, value: seconds });
    }
    seconds
        .checked_mul(Decimal::from(1000))
        .and_then(|millis| millis.trunc().to_u64())
        .map(Duration::from_millis)
        .ok_or(BehaviorError::InvalidDuration { field, value: seconds })
}
