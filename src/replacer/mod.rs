mod clock;
mod fifo;
mod lru;
mod optimal;

use {
    crate::{PageId, PolicyResult, SimResult, record_run},
    serde::Serialize,
    std::fmt,
};

pub use {clock::ClockReplacer, fifo::FifoReplacer, lru::LruReplacer, optimal::OptimalReplacer};

/// The four replacement policies the simulator implements.
///
/// `Policy` is the selector carried in every [`PolicyResult`]; per-run
/// engine state lives in the corresponding replacer type. Serialized form
/// and [`Display`](fmt::Display) both use the report labels (`"FIFO"`,
/// `"LRU"`, `"Optimal"`, `"Clock"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Policy {
    /// First-in, first-out: evict the page resident the longest.
    #[serde(rename = "FIFO")]
    Fifo,

    /// Least recently used: evict the page referenced the longest ago.
    #[serde(rename = "LRU")]
    Lru,

    /// Belady's offline optimum: evict the page next used farthest ahead.
    Optimal,

    /// Second chance: sweep per-frame reference bits with a circular hand.
    Clock,
}

impl Policy {
    /// All four policies, in report order.
    pub const ALL: [Self; 4] = [Self::Fifo, Self::Lru, Self::Optimal, Self::Clock];

    /// The label used in reports and in serialized output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Optimal => "Optimal",
            Self::Clock => "Clock",
        }
    }

    /// Runs this policy over `pages` with `capacity` frames.
    ///
    /// Fails with [`SimError`](crate::SimError) for a zero capacity or an
    /// empty sequence, before any simulation work happens. Runs are
    /// deterministic: the same input always yields the same result,
    /// trace included.
    pub fn run<P: PageId>(self, pages: &[P], capacity: usize) -> SimResult<PolicyResult<P>> {
        match self {
            Self::Fifo => record_run(self, FifoReplacer::new(capacity), pages),
            Self::Lru => record_run(self, LruReplacer::new(capacity), pages),
            Self::Optimal => record_run(self, OptimalReplacer::new(capacity), pages),
            Self::Clock => record_run(self, ClockReplacer::new(capacity), pages),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
