//! Error type shared by every fallible operation of the core.
//!
//! Construction-time failures (bad configuration, reference-data gaps,
//! unusable weighted tables) abort whatever was being built. Runtime
//! movement never produces an error; see [`crate::location::MoveResult`].

use crate::components::Alignment;

/// Errors raised while loading reference data or generating game state
#[derive(Debug)]
pub enum CoreError {
    /// Location/grid parameters that can never produce a playable map
    InvalidConfig(String),
    /// A profession key missing from the professions table
    UnknownProfession(String),
    /// An area archetype key missing from the areas table
    UnknownArea(String),
    /// A location template key missing from the locations table
    UnknownLocation(String),
    /// An interaction key missing from the interactions table
    UnknownInteraction(String),
    /// No rank bound covers this influence score
    NoRank(i32),
    /// Alignment with no conservative/moderate/liberal ordinal
    AlignmentOutOfDomain(Alignment),
    /// Weighted table with nothing to draw from, or a total past `u32::MAX`
    DegenerateWeights(String),
    /// Reference table value no rule can use
    InvalidData(String),
    /// Malformed reference table
    Data(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Data(e)
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            CoreError::UnknownProfession(key) => write!(f, "Unknown profession '{}'", key),
            CoreError::UnknownArea(key) => write!(f, "Unknown area archetype '{}'", key),
            CoreError::UnknownLocation(key) => write!(f, "Unknown location template '{}'", key),
            CoreError::UnknownInteraction(key) => write!(f, "Unknown interaction '{}'", key),
            CoreError::NoRank(influence) => {
                write!(f, "No rank covers an influence score of {}", influence)
            }
            CoreError::AlignmentOutOfDomain(alignment) => {
                write!(f, "Alignment {:?} has no display ordinal", alignment)
            }
            CoreError::DegenerateWeights(what) => {
                write!(f, "Weighted table '{}' cannot be sampled", what)
            }
            CoreError::InvalidData(msg) => write!(f, "Invalid reference data: {}", msg),
            CoreError::Data(e) => write!(f, "Reference data error: {}", e),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoreError::Data(e) => Some(e),
            _ => None,
        }
    }
}
