use pagesim::{ClockReplacer, Policy, ReplacementPolicy};

#[test]
fn step_by_step() {
    // Scenario: the worked example. Two frames, five requests. The fault
    // at request 3 sweeps both set bits clear, wraps, and claims slot 0.
    let result = Policy::Clock.run(&[1, 2, 1, 3, 2], 2).unwrap();

    assert_eq!(result.total_faults, 3);
    assert_eq!(result.final_memory, vec![3, 2]);

    let memory: Vec<_> = result.trace.iter().map(|step| step.memory.clone()).collect();
    assert_eq!(
        memory,
        vec![vec![], vec![1], vec![1, 2], vec![1, 2], vec![3, 2]]
    );

    let faulted: Vec<_> = result.trace.iter().map(|step| step.faulted).collect();
    assert_eq!(faulted, vec![true, true, false, true, false]);
}

#[test]
fn fill_claims_slots_in_ring_order() {
    // Scenario: more frames than distinct pages. Every fault during the
    // fill lands in the next empty slot; a hit in between does not move
    // the hand off its course.
    let mut replacer = ClockReplacer::new(5);
    let pages = [7, 8, 9, 7, 10];

    assert!(replacer.step(7, 0, &pages));
    assert_eq!(replacer.resident(), vec![7]);
    assert!(replacer.step(8, 1, &pages));
    assert_eq!(replacer.resident(), vec![7, 8]);
    assert!(replacer.step(9, 2, &pages));
    assert_eq!(replacer.resident(), vec![7, 8, 9]);

    assert!(!replacer.step(7, 3, &pages));
    assert!(replacer.step(10, 4, &pages));
    assert_eq!(replacer.resident(), vec![7, 8, 9, 10]);
}

#[test]
fn full_sweep_wraps_to_first_slot() {
    // Scenario: all three bits are set when page 4 faults. The sweep
    // clears every bit, comes back around, and replaces slot 0.
    let result = Policy::Clock.run(&[1, 2, 3, 4], 3).unwrap();

    assert_eq!(result.total_faults, 4);
    assert_eq!(result.final_memory, vec![4, 2, 3]);
}

#[test]
fn second_chance_spares_referenced_page() {
    // Scenario: the first sweep leaves page 2's bit clear; a hit sets it
    // again, so the next sweep passes page 2 by, clearing its bit, and
    // evicts page 3 instead.
    let result = Policy::Clock.run(&[1, 2, 3, 4, 2, 5], 3).unwrap();

    assert_eq!(result.total_faults, 5);
    assert_eq!(result.final_memory, vec![4, 2, 5]);

    let faulted: Vec<_> = result.trace.iter().map(|step| step.faulted).collect();
    assert_eq!(faulted, vec![true, true, true, true, false, true]);
}

#[test]
fn faults_never_increase_with_capacity() {
    // Clock has no equivalent of Belady's anomaly on these inputs; the
    // fault count levels off once every page fits.
    let short = [1, 2, 1, 3, 2];
    let counts: Vec<_> = (1..=5)
        .map(|capacity| Policy::Clock.run(&short, capacity).unwrap().total_faults)
        .collect();
    assert_eq!(counts, vec![5, 3, 3, 3, 3]);

    let long = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
    let counts: Vec<_> = (2..=5)
        .map(|capacity| Policy::Clock.run(&long, capacity).unwrap().total_faults)
        .collect();
    assert_eq!(counts, vec![12, 10, 10, 5]);
}
