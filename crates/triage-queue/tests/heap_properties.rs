//! Randomized checks of the waiting-room heap.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use triage_models::Patient;
use triage_queue::{PatientQueue, QueueError};

fn random_class(rng: &mut StdRng) -> u8 {
    rng.gen_range(1..=4)
}

#[test]
fn test_heap_property_holds_after_every_call() {
    let mut rng = StdRng::seed_from_u64(0x7219);
    let mut queue = PatientQueue::new();

    for step in 0..2_000 {
        if queue.is_empty() || rng.gen_bool(0.6) {
            queue.insert(format!("patient-{}", step), random_class(&mut rng));
        } else {
            queue.remove().unwrap();
        }
        assert!(queue.is_heap(), "heap property broken at step {}", step);
    }
}

#[test]
fn test_drain_yields_class_then_arrival_order() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut queue = PatientQueue::new();
        let count = rng.gen_range(1..200);
        for i in 0..count {
            queue.insert(format!("p{}", i), random_class(&mut rng));
        }

        let mut drained: Vec<Patient> = Vec::new();
        while let Ok(patient) = queue.remove() {
            drained.push(patient);
        }
        assert_eq!(drained.len(), count);

        for pair in drained.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.priority_class() < b.priority_class()
                    || (a.priority_class() == b.priority_class()
                        && a.arrival_sequence() < b.arrival_sequence()),
                "seed {}: {:?} called before {:?}",
                seed,
                a,
                b
            );
        }
    }
}

#[test]
fn test_arrivals_strictly_increase_across_removals() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut queue = PatientQueue::new();
    let mut last: Option<u64> = None;

    for i in 0..500 {
        let arrival = queue.insert(format!("p{}", i), random_class(&mut rng));
        if let Some(prev) = last {
            assert!(arrival > prev);
        }
        last = Some(arrival);

        if rng.gen_bool(0.5) {
            queue.remove().unwrap();
        }
    }
    assert_eq!(queue.next_arrival(), 500);
}

#[test]
fn test_size_tracks_inserts_minus_removes() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut queue = PatientQueue::new();
    let mut inserts = 0usize;
    let mut removes = 0usize;

    for i in 0..1_000 {
        if rng.gen_bool(0.5) {
            queue.insert(format!("p{}", i), random_class(&mut rng));
            inserts += 1;
        } else if queue.remove().is_ok() {
            removes += 1;
        }
        assert_eq!(queue.size(), inserts - removes);
    }
}

#[test]
fn test_peek_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut queue = PatientQueue::new();
    for i in 0..50 {
        queue.insert(format!("p{}", i), random_class(&mut rng));
    }

    let first = queue.peek().unwrap().clone();
    for _ in 0..10 {
        let again = queue.peek().unwrap();
        assert_eq!(again.arrival_sequence(), first.arrival_sequence());
        assert_eq!(again.name(), first.name());
        assert_eq!(queue.size(), 50);
    }
    assert_eq!(queue.remove().unwrap().name(), first.name());
}

#[test]
fn test_drained_queue_reports_empty() {
    let mut queue = PatientQueue::new();
    for i in 0..10 {
        queue.insert(format!("p{}", i), 2);
    }
    for _ in 0..10 {
        queue.remove().unwrap();
    }

    assert_eq!(queue.peek().unwrap_err(), QueueError::EmptyQueue);
    assert_eq!(queue.remove().unwrap_err(), QueueError::EmptyQueue);
    assert_eq!(queue.size(), 0);
}
