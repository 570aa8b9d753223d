use {
    crate::{PageId, Policy, ReplacementPolicy, SimError, SimResult},
    serde::Serialize,
    tracing::debug,
};

/// One recorded simulation step.
///
/// The memory snapshot is taken before the request is processed, so a
/// consumer sees exactly the state the eviction decision (if any) was
/// made against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord<P: PageId> {
    /// The requested page.
    pub page: P,

    /// Resident pages immediately before this request was processed, in
    /// presentation order.
    pub memory: Vec<P>,

    /// Whether this request faulted.
    pub faulted: bool,

    /// Faults accumulated up to and including this request.
    pub cumulative_faults: usize,
}

/// Outcome of one policy run over a page reference sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyResult<P: PageId> {
    /// Label of the policy that produced this result.
    pub policy: Policy,

    /// Total number of page faults over the whole sequence.
    pub total_faults: usize,

    /// Resident pages after the last request, in presentation order.
    ///
    /// Per-step snapshots precede each decision, so the state the run
    /// ends in is only available here.
    pub final_memory: Vec<P>,

    /// One record per request, in request order.
    pub trace: Vec<StepRecord<P>>,
}

impl<P: PageId> PolicyResult<P> {
    /// Cumulative fault count per request -- this policy's fault curve.
    pub fn fault_series(&self) -> Vec<usize> {
        self.trace.iter().map(|step| step.cumulative_faults).collect()
    }
}

/// Checks the configuration shared by every run entry point.
fn validate<P: PageId>(pages: &[P], capacity: usize) -> SimResult<()> {
    if capacity == 0 {
        return Err(SimError::ZeroCapacity);
    }
    if pages.is_empty() {
        return Err(SimError::EmptySequence);
    }
    Ok(())
}

/// Drives `replacer` over the whole reference sequence, recording one
/// [`StepRecord`] per request.
///
/// This is the loop shared by the four built-in policies, and custom
/// [`ReplacementPolicy`] implementations can be run through it as well;
/// `policy` is only the label stamped into the result, so callers pairing
/// a label with a foreign replacer are responsible for the match.
///
/// The configuration is validated up front: with a zero capacity or an
/// empty sequence the replacer never sees a single request and no partial
/// trace is produced.
pub fn record_run<P, R>(policy: Policy, mut replacer: R, pages: &[P]) -> SimResult<PolicyResult<P>>
where
    P: PageId,
    R: ReplacementPolicy<P>,
{
    validate(pages, replacer.capacity())?;

    let mut trace = Vec::with_capacity(pages.len());
    let mut cumulative_faults = 0;
    for (index, &page) in pages.iter().enumerate() {
        // The snapshot must precede the decision.
        let memory = replacer.resident();
        let faulted = replacer.step(page, index, pages);
        cumulative_faults += usize::from(faulted);
        trace.push(StepRecord {
            page,
            memory,
            faulted,
            cumulative_faults,
        });
    }

    debug!(
        policy = %policy,
        requests = pages.len(),
        total_faults = cumulative_faults,
        "run recorded"
    );

    Ok(PolicyResult {
        policy,
        total_faults: cumulative_faults,
        final_memory: replacer.resident(),
        trace,
    })
}
