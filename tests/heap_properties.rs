use highpix::{BoundedMinHeap, Entry, HighPixError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_heap_order(heap: &BoundedMinHeap<u16>) {
    let entries = heap.as_slice();
    for child in 1..entries.len() {
        let parent = (child - 1) / 2;
        assert!(
            entries[parent].value <= entries[child].value,
            "slot {parent} ({}) above slot {child} ({})",
            entries[parent].value,
            entries[child].value
        );
    }
}

#[test]
fn random_push_pop_preserves_heap_order_and_bounds() {
    let mut rng = StdRng::seed_from_u64(0);
    for capacity in [1usize, 2, 3, 7, 50, 64] {
        let mut heap = BoundedMinHeap::<u16>::new(capacity).unwrap();
        let mut next_pos = 0usize;
        for _ in 0..2000 {
            if rng.random_bool(0.6) {
                let value = rng.random_range(0..32u16);
                let was_full = heap.is_full();
                let result = heap.push(next_pos, value);
                next_pos += 1;
                if was_full {
                    assert_eq!(result, Err(HighPixError::HeapFull { capacity }));
                } else {
                    assert!(result.is_ok());
                }
            } else {
                let was_empty = heap.is_empty();
                let expected_min = heap.peek_min().ok();
                let result = heap.pop_min();
                if was_empty {
                    assert_eq!(result, Err(HighPixError::EmptyHeap));
                } else {
                    assert_eq!(result.map(|e| e.value).ok(), expected_min);
                }
            }
            assert!(heap.len() <= heap.capacity());
            assert_heap_order(&heap);
        }
    }
}

#[test]
fn draining_yields_non_decreasing_values_then_empty() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut heap = BoundedMinHeap::<u16>::new(40).unwrap();
    for pos in 0..40 {
        heap.push(pos, rng.random_range(0..10u16)).unwrap();
    }

    let size = heap.len();
    let mut drained = Vec::with_capacity(size);
    for _ in 0..size {
        drained.push(heap.pop_min().unwrap().value);
    }
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(heap.pop_min(), Err(HighPixError::EmptyHeap));
}

#[test]
fn positions_travel_with_values() {
    let mut rng = StdRng::seed_from_u64(11);
    let source: Vec<u16> = (0..25).map(|_| rng.random()).collect();
    let mut heap = BoundedMinHeap::<u16>::new(source.len()).unwrap();
    for (pos, &value) in source.iter().enumerate() {
        heap.push(pos, value).unwrap();
    }
    while let Ok(Entry { position, value }) = heap.pop_min() {
        assert_eq!(source[position], value);
    }
}

#[test]
fn capacity_one_push_without_evicting_fails() {
    let mut heap = BoundedMinHeap::<u16>::new(1).unwrap();
    heap.push(0, 7).unwrap();
    assert_eq!(heap.push(1, 9), Err(HighPixError::HeapFull { capacity: 1 }));

    assert_eq!(heap.pop_min().unwrap(), Entry { position: 0, value: 7 });
    heap.push(1, 9).unwrap();
    assert_eq!(heap.peek_min().unwrap(), 9);
}

#[test]
fn capacity_zero_is_invalid() {
    let err = BoundedMinHeap::<u16>::new(0).unwrap_err();
    assert!(matches!(err, HighPixError::InvalidCapacity { capacity: 0, .. }));
}
