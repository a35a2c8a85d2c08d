//! Randomized differential test: a `SimpleVector` driven by a seeded operation
//! sequence must match a `Vec` model element for element, and its capacity
//! must follow the growth policy exactly.

use simple_vector::SimpleVector;
use simple_vector_testkit::{Op, OpGenerator};

/// Capacity the growth policy prescribes after applying `op` to a vector of
/// `len` elements and `capacity` slots.
fn expected_capacity(op: Op, len: usize, capacity: usize) -> usize {
    match op {
        Op::PushBack(_) if len == capacity => (2 * capacity).max(1),
        Op::Insert(..) if capacity == 0 => 1,
        Op::Insert(..) if len == capacity => (2 * capacity).max(len + 1),
        Op::Resize(n) if n > capacity => (2 * capacity).max(n),
        Op::Reserve(n) if n > capacity => n,
        _ => capacity,
    }
}

fn apply(v: &mut SimpleVector<i64>, model: &mut Vec<i64>, op: Op) {
    match op {
        Op::PushBack(x) => {
            v.push_back(x);
            model.push(x);
        }
        Op::Insert(i, x) => {
            assert_eq!(v.insert(i, x), i);
            model.insert(i, x);
        }
        Op::Erase(i) => {
            assert_eq!(v.erase(i), i);
            model.remove(i);
        }
        Op::PopBack => {
            v.pop_back();
            model.pop();
        }
        Op::Resize(n) => {
            v.resize(n);
            model.resize(n, 0);
        }
        Op::Reserve(n) => v.reserve(n),
        Op::Clear => {
            v.clear();
            model.clear();
        }
    }
}

fn run(seed: u64, count: usize, max_len: usize) {
    let mut generator = OpGenerator::new(seed, max_len);
    let mut v = SimpleVector::new();
    let mut model = Vec::new();
    for step in 0..count {
        let op = generator.next_op(v.len());
        let expected = expected_capacity(op, v.len(), v.capacity());
        apply(&mut v, &mut model, op);

        assert_eq!(
            v.as_slice(),
            model.as_slice(),
            "seed {seed}, step {step}, op {op:?}"
        );
        assert!(v.len() <= v.capacity());
        assert_eq!(v.capacity(), expected, "seed {seed}, step {step}, op {op:?}");
    }
}

#[test]
fn test_differential_short_sequences() {
    for seed in 0..64 {
        run(seed, 200, 16);
    }
}

#[test]
fn test_differential_long_sequence() {
    run(297135646, 20_000, 512);
}

#[test]
fn test_copies_match_model() {
    let ops = OpGenerator::new(11, 64).sequence(500);
    let mut v = SimpleVector::new();
    let mut model = Vec::new();
    for (step, op) in ops.into_iter().enumerate() {
        apply(&mut v, &mut model, op);
        if step % 50 == 0 {
            let copy = v.clone();
            assert_eq!(copy, v);
            assert_eq!(copy.capacity(), v.len());

            let mut assigned = SimpleVector::from_value(3, -7);
            assigned.clone_from(&v);
            assert_eq!(assigned, model);
        }
    }
    assert_eq!(v.into_vec(), model);
}
