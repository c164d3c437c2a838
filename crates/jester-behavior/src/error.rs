//! Error types for the jester-behavior crate.
//!
//! Runtime event handling never fails: every runtime condition is handled
//! by branching. Errors only exist for things that must be rejected before
//! a beast becomes active, such as an invalid profile or a duplicate
//! registration on the bus.

use jester_types::ActorId;
use rust_decimal::Decimal;

/// Errors raised while loading profiles or wiring controllers.
#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    /// A configured chance lies outside `[0, 1]`.
    #[error("{field} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange {
        /// Name of the offending profile field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// A configured duration is negative or too large to represent.
    #[error("{field} must be a non-negative number of seconds, got {value}")]
    InvalidDuration {
        /// Name of the offending profile field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// A controller is already registered for this actor.
    #[error("actor {0} already has a beast controller")]
    DuplicateController(ActorId),
}
