//! Belady's optimal (offline) page replacement.
//!
//! The policy is non-causal: on every miss it consults the part of the
//! reference sequence that has not been requested yet, which is only
//! possible when the whole sequence is known up front. That makes it
//! unusable as a live cache policy and exactly right as a baseline: no
//! online policy faults less often on the same input.
//!
//! See: Belady, "A study of replacement algorithms for a virtual-storage
//! computer", IBM Systems Journal, 1966.

use crate::{PageId, ReplacementPolicy};

/// Belady's optimal page replacer.
///
/// On a miss at full capacity, resident pages are scanned in their
/// current order. The first page with no future occurrence is evicted on
/// the spot; failing that, the page whose next use lies farthest ahead is
/// chosen, with a strictly-greater comparison so the earliest scanned
/// candidate wins.
pub struct OptimalReplacer<P: PageId> {
    /// Maximum number of resident frames.
    capacity: usize,

    /// Resident pages in insertion order.
    frames: Vec<P>,
}

impl<P: PageId> OptimalReplacer<P> {
    /// Creates an optimal replacer for `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            frames: Vec::with_capacity(capacity),
        }
    }
}

impl<P: PageId> ReplacementPolicy<P> for OptimalReplacer<P> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident(&self) -> Vec<P> {
        self.frames.clone()
    }

    fn step(&mut self, page: P, index: usize, pages: &[P]) -> bool {
        if self.frames.contains(&page) {
            return false;
        }

        if self.frames.len() >= self.capacity {
            // Lookahead covers the suffix strictly after the current
            // request.
            let future = &pages[index + 1..];

            let mut target = 0;
            let mut farthest: Option<usize> = None;
            for (slot, &resident) in self.frames.iter().enumerate() {
                match future.iter().position(|&upcoming| upcoming == resident) {
                    // Never referenced again: no better victim exists.
                    None => {
                        target = slot;
                        break;
                    }
                    Some(next_use) => {
                        if farthest.is_none_or(|seen| next_use > seen) {
                            farthest = Some(next_use);
                            target = slot;
                        }
                    }
                }
            }
            self.frames.remove(target);
        }

        self.frames.push(page);
        true
    }
}
