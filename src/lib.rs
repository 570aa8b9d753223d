#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(elided_lifetimes_in_paths)]

mod driver;
mod error;
mod replacer;
mod trace;

use std::{fmt, hash::Hash};

pub use {
    driver::Comparison,
    error::{SimError, SimResult},
    replacer::{ClockReplacer, FifoReplacer, LruReplacer, OptimalReplacer, Policy},
    trace::{PolicyResult, StepRecord, record_run},
};

/// Page identifier type.
///
/// An opaque value naming a requested page. Policies compare identifiers
/// for equality only -- there are no ordering semantics -- so anything
/// copyable, hashable and printable qualifies. Plain integers are the
/// usual choice.
pub trait PageId: Copy + Hash + Eq + fmt::Display + fmt::Debug {}

impl<T> PageId for T where T: Copy + Hash + Eq + fmt::Display + fmt::Debug {}

/// Page replacement policy, as seen by the trace recorder.
///
/// One value of an implementing type holds the resident set and the
/// policy-private bookkeeping (queue order, recency stamps, reference
/// bits) for exactly one simulation run. The recorder loop in
/// [`record_run`] creates it, feeds it every request in order and
/// discards it at the end; nothing survives between runs.
///
/// The four built-in implementations share this seam so that a single
/// driver loop can run them interchangeably. External implementations
/// can be driven through [`record_run`] the same way.
pub trait ReplacementPolicy<P: PageId> {
    /// Maximum number of resident frames.
    fn capacity(&self) -> usize;

    /// Pages currently resident, in presentation order.
    ///
    /// FIFO reports insertion order (head first); LRU and Optimal keep
    /// insertion order for presentation only; Clock reports occupied
    /// slots in slot order, skipping empty ones.
    fn resident(&self) -> Vec<P>;

    /// Processes the request at position `index`, where `page` is
    /// `pages[index]` and `pages` is the full reference sequence.
    ///
    /// Returns `true` if the request faulted. Policies that need no
    /// lookahead or recency stamp ignore the extra arguments.
    fn step(&mut self, page: P, index: usize, pages: &[P]) -> bool;
}
