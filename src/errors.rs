use std::fmt;
use std::io;

/// Errors arising from sweep configuration, numerics, or result handling.
#[derive(Debug)]
pub enum SweepError {
    /// Invalid launch configuration, rejected before any simulation work.
    Config(String),

    /// A numeric anomaly such as a non-finite Boltzmann factor.
    Numerics(String),

    /// `reduce()` was called on an accumulator holding zero samples.
    EmptyAccumulator,

    /// Two accumulators covering different temperatures were merged.
    MergeMismatch {
        /// Temperature of the receiving accumulator.
        left: f64,
        /// Temperature of the merged-in accumulator.
        right: f64,
    },

    /// A worker failed to flush its results.
    Output(io::Error),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::Numerics(msg) => write!(f, "Numeric anomaly: {msg}"),
            Self::EmptyAccumulator => {
                write!(f, "Cannot reduce an accumulator with zero samples")
            }
            Self::MergeMismatch { left, right } => {
                write!(
                    f,
                    "Cannot merge accumulators for different temperatures ({left} vs {right})"
                )
            }
            Self::Output(e) => write!(f, "Failed to write results: {e}"),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SweepError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}
