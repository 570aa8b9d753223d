use thiserror::Error;

/// Simulation configuration error.
///
/// Both variants are caught before any per-request work happens, so a
/// failed run never produces a partial trace. Malformed page tokens are
/// not represented here: parsing textual input is the caller's concern,
/// and the engines only ever see an already validated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// Capacity of zero frames leaves nothing to replace into.
    #[error("frame capacity must be at least 1")]
    ZeroCapacity,

    /// No page references to simulate.
    #[error("page reference sequence is empty")]
    EmptySequence,
}

/// Simulation result type.
pub type SimResult<T> = Result<T, SimError>;
