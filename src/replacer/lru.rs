use {
    crate::{PageId, ReplacementPolicy},
    priority_queue::PriorityQueue,
    std::cmp::Reverse,
};

/// Least recently used (LRU) page replacer.
///
/// This implementation uses a priority queue to manage recency. The queue
/// is ordered by the request index of each resident page's latest
/// reference: the most recently referenced page sits at the back, while
/// the least recently referenced one is the first to be evicted. A
/// parallel vector keeps insertion order for snapshots, since the queue
/// itself has no meaningful iteration order.
pub struct LruReplacer<P: PageId> {
    /// Maximum number of resident frames.
    capacity: usize,

    /// Resident pages in insertion order, for snapshots.
    frames: Vec<P>,

    /// Resident pages keyed by last reference; the top of the queue is
    /// the least recently used page.
    recency: PriorityQueue<P, Reverse<usize>>,
}

impl<P: PageId> LruReplacer<P> {
    /// Creates an LRU replacer for `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            frames: Vec::with_capacity(capacity),
            recency: PriorityQueue::with_capacity(capacity),
        }
    }
}

impl<P: PageId> ReplacementPolicy<P> for LruReplacer<P> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident(&self) -> Vec<P> {
        self.frames.clone()
    }

    fn step(&mut self, page: P, index: usize, _pages: &[P]) -> bool {
        if self.recency.get(&page).is_some() {
            // A hit refreshes the recency stamp and nothing else. Both
            // insert and update are handled by the `push` method.
            self.recency.push(page, Reverse(index));
            return false;
        }

        if self.frames.len() >= self.capacity {
            // Evict the page with the oldest stamp. Request indices are
            // unique, so there is never a tie to break.
            if let Some((victim, _)) = self.recency.pop() {
                self.frames.retain(|&frame| frame != victim);
            }
        }

        self.frames.push(page);
        self.recency.push(page, Reverse(index));
        true
    }
}
