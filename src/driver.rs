use {
    crate::{PageId, Policy, PolicyResult, SimResult},
    serde::Serialize,
    tracing::debug,
};

/// Side-by-side comparison of all four policies over one input.
///
/// Every policy sees the identical page sequence and capacity, so fault
/// counts are directly comparable. The driver adds nothing algorithmic:
/// each number it exposes comes straight from one [`PolicyResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison<P: PageId> {
    /// Per-policy results, in [`Policy::ALL`] order.
    results: [PolicyResult<P>; 4],
}

impl<P: PageId> Comparison<P> {
    /// Runs all four policies over `pages` with `capacity` frames.
    ///
    /// The configuration is checked before any engine runs, so a failure
    /// never yields partial results.
    pub fn run(pages: &[P], capacity: usize) -> SimResult<Self> {
        debug!(
            requests = pages.len(),
            capacity, "comparing replacement policies"
        );

        Ok(Self {
            results: [
                Policy::Fifo.run(pages, capacity)?,
                Policy::Lru.run(pages, capacity)?,
                Policy::Optimal.run(pages, capacity)?,
                Policy::Clock.run(pages, capacity)?,
            ],
        })
    }

    /// All four results, in [`Policy::ALL`] order.
    pub fn results(&self) -> &[PolicyResult<P>] {
        &self.results
    }

    /// The result recorded for `policy`.
    pub fn result(&self, policy: Policy) -> &PolicyResult<P> {
        &self.results[policy as usize]
    }

    /// Total faults per policy, the bar-chart view of the comparison.
    pub fn total_faults(&self) -> [(Policy, usize); 4] {
        self.results
            .each_ref()
            .map(|result| (result.policy, result.total_faults))
    }

    /// Cumulative fault series for `policy`, one entry per request.
    pub fn fault_series(&self, policy: Policy) -> Vec<usize> {
        self.result(policy).fault_series()
    }

    /// Cumulative fault series for all four policies, the line-chart view
    /// of the comparison.
    pub fn fault_series_all(&self) -> [(Policy, Vec<usize>); 4] {
        self.results
            .each_ref()
            .map(|result| (result.policy, result.fault_series()))
    }
}
