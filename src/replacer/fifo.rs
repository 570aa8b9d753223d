use {
    crate::{PageId, ReplacementPolicy},
    std::collections::VecDeque,
};

/// First-in, first-out (FIFO) page replacer.
///
/// The resident set is a queue in insertion order: the head is the page
/// resident the longest and the next victim. Hits leave the queue
/// untouched, so FIFO ignores recency entirely and is the one policy
/// here subject to Belady's anomaly.
pub struct FifoReplacer<P: PageId> {
    /// Maximum number of resident frames.
    capacity: usize,

    /// Resident pages, oldest insertion first.
    frames: VecDeque<P>,
}

impl<P: PageId> FifoReplacer<P> {
    /// Creates a FIFO replacer for `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            frames: VecDeque::with_capacity(capacity),
        }
    }
}

impl<P: PageId> ReplacementPolicy<P> for FifoReplacer<P> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident(&self) -> Vec<P> {
        self.frames.iter().copied().collect()
    }

    fn step(&mut self, page: P, _index: usize, _pages: &[P]) -> bool {
        if self.frames.contains(&page) {
            // Hits do not refresh insertion order.
            return false;
        }

        if self.frames.len() >= self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(page);
        true
    }
}
