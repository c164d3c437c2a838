//! Error types for the Jester engine binary.
//!
//! [`EngineError`] wraps every failure mode during startup and encounter
//! execution so that `main` can propagate with `?`.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// Wiring the beast into the bus failed.
    #[error("behavior error: {source}")]
    Behavior {
        /// The underlying behavior error.
        #[from]
        source: jester_behavior::BehaviorError,
    },
}
