use crate::host::HostError;
use std::fmt;
use thiserror::Error;

/// Coordinate axis label used in errors and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Failure modes of a refinement batch.
///
/// Either kind discards the whole batch: intervals advance in lockstep
/// across handles, so no partial result is meaningful once one readout
/// breaks the shared schedule.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RefineError {
    /// A rounded readout fell outside the two values predicted by the
    /// current interval. The host's rounding does not follow the consistent
    /// nearest-integer rule the search relies on, so retrying the same
    /// inputs would fail the same way.
    #[error("inconsistent {axis}-axis readout {observed} at cycle {cycle}: predicted 0 or 1")]
    InconsistentReadout {
        axis: Axis,
        /// Sign-normalized readout that broke the prediction.
        observed: i64,
        /// Zero-based perturb/refresh/read cycle in which it happened.
        cycle: usize,
    },
    /// A host operation failed while setting up or driving the batch.
    #[error(transparent)]
    Host(#[from] HostError),
}
