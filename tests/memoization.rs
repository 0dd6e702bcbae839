mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use sequin::{sequence, FnSequence, Sequence, SequenceExt, SequenceOf, Sticky, TrySticky};

#[test]
fn sticky_drains_the_origin_at_most_once() {
    common::init_tracing();

    let calls = AtomicUsize::new(0);
    let sticky = Sticky::new(FnSequence::new(|| {
        calls.fetch_add(1, Ordering::SeqCst);
        vec!["h", "w"]
    }));

    for _ in 0..5 {
        assert_eq!(sticky.to_vec(), vec!["h", "w"]);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn sticky_size_of_a_growing_source_is_stable() {
    let calls = AtomicUsize::new(0);
    let growing = FnSequence::new(|| {
        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
        vec![0u8; n]
    });

    // The raw source reports a different size on each direct call...
    assert_eq!(growing.length(), 1);
    assert_eq!(growing.length(), 2);

    // ...but through the sticky wrapper both reads agree.
    let sticky = Sticky::new(growing);
    assert_eq!(sticky.length(), sticky.length());
}

#[test]
fn sticky_replays_are_idempotent_through_decorators() {
    let sticky = SequenceOf::from((0..20).collect::<Vec<_>>())
        .filtered(|n| n % 3 == 0)
        .sticky();

    let first = sticky.to_vec();
    for _ in 0..4 {
        assert_eq!(sticky.to_vec(), first);
    }
    assert!(sequence::eq(&sticky, &sticky));
}

#[test]
fn failed_materialization_leaves_no_partial_cache() {
    common::init_tracing();

    let calls = AtomicUsize::new(0);
    let flaky = FnSequence::new(|| {
        if calls.fetch_add(1, Ordering::SeqCst) < 2 {
            vec![Ok("partial"), Err("supplier failed")]
        } else {
            vec![Ok("a"), Ok("b")]
        }
    });
    let sticky = TrySticky::new(flaky);

    // Two failing attempts, neither of which must cache the partial run.
    for _ in 0..2 {
        let out: Vec<_> = sticky.cursor().collect();
        assert_eq!(out, vec![Err("supplier failed")]);
        assert!(!sticky.materialized());
    }

    // Third attempt succeeds and pins the snapshot.
    let out: Vec<_> = sticky.cursor().collect();
    assert_eq!(out, vec![Ok("a"), Ok("b")]);
    assert!(sticky.materialized());

    // Replay never consults the origin again.
    let _: Vec<_> = sticky.cursor().collect();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn sticky_snapshot_survives_interleaved_partial_reads() {
    let calls = AtomicUsize::new(0);
    let sticky = Sticky::new(FnSequence::new(|| {
        calls.fetch_add(1, Ordering::SeqCst);
        vec![1, 2, 3, 4]
    }));

    let mut a = sticky.cursor();
    assert_eq!(a.next(), Some(1));

    // A second cursor replays from the start of the snapshot.
    let mut b = sticky.cursor();
    assert_eq!(b.next(), Some(1));
    assert_eq!(a.next(), Some(2));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
