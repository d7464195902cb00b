//! Error types for the runner
//!
//! Collisions and missing landmarks are not errors; they are ordinary game
//! events. What remains is configuration and tracker bring-up.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    /// A tuning value is outside its valid range
    #[error("Invalid tuning value for `{field}`: {reason}")]
    InvalidTuning {
        /// Offending field name
        field: &'static str,
        /// What the value must satisfy
        reason: &'static str,
    },

    /// Tuning or settings JSON could not be parsed
    #[error("Malformed configuration: {0}")]
    Format(#[from] serde_json::Error),

    /// The hand tracker could not start (camera permission, missing device)
    #[error("Hand tracking failed to start: {0}")]
    TrackingInit(String),

    /// A landmark set was too short to contain the palm landmark
    #[error("Landmark {index} requested but hand has only {len} landmarks")]
    LandmarkOutOfRange {
        /// Requested landmark index
        index: usize,
        /// Number of landmarks delivered
        len: usize,
    },
}
