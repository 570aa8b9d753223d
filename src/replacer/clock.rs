use crate::{PageId, ReplacementPolicy};

/// Clock (second chance) page replacer.
///
/// Frames form a fixed ring of slots with one reference bit each and a
/// circular hand. A hit sets the bit of the page's slot and leaves the
/// hand alone. A miss sweeps from the hand, clearing set bits as it
/// passes, and claims the first slot whose bit is already clear. Empty
/// slots carry a clear bit, so during the initial fill the hand claims
/// slots in ring order without evicting anything.
pub struct ClockReplacer<P: PageId> {
    /// Frame slots; `None` marks a slot that has never been filled.
    slots: Vec<Option<P>>,

    /// Reference bit per slot.
    referenced: Vec<bool>,

    /// Current sweep position.
    hand: usize,
}

impl<P: PageId> ClockReplacer<P> {
    /// Creates a clock replacer for `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            referenced: vec![false; capacity],
            hand: 0,
        }
    }
}

impl<P: PageId> ReplacementPolicy<P> for ClockReplacer<P> {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn resident(&self) -> Vec<P> {
        self.slots.iter().flatten().copied().collect()
    }

    fn step(&mut self, page: P, _index: usize, _pages: &[P]) -> bool {
        if let Some(slot) = self.slots.iter().position(|&occupant| occupant == Some(page)) {
            // Grant a second chance; the hand does not move on hits.
            self.referenced[slot] = true;
            return false;
        }

        // Every visited bit is cleared, so the sweep stops within one
        // full revolution.
        while self.referenced[self.hand] {
            self.referenced[self.hand] = false;
            self.hand = (self.hand + 1) % self.slots.len();
        }

        self.slots[self.hand] = Some(page);
        self.referenced[self.hand] = true;
        self.hand = (self.hand + 1) % self.slots.len();
        true
    }
}
