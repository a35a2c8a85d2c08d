//! Random operation sequences for differential testing against `Vec`.

/// One mutating operation on a sequence of `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    PushBack(i64),
    Insert(usize, i64),
    Erase(usize),
    PopBack,
    Resize(usize),
    Reserve(usize),
    Clear,
}

/// Generates operations that are valid for a sequence of a given length.
///
/// The generator is seeded, so a failing sequence can be replayed.
pub struct OpGenerator {
    rng: fastrand::Rng,
    max_len: usize,
}

impl OpGenerator {
    pub fn new(seed: u64, max_len: usize) -> OpGenerator {
        assert_ne!(max_len, 0);
        OpGenerator {
            rng: fastrand::Rng::with_seed(seed),
            max_len,
        }
    }

    /// Picks the next operation for a sequence currently holding `len`
    /// elements. Position arguments are always in range.
    pub fn next_op(&mut self, len: usize) -> Op {
        let value = self.rng.i64(-1000..1000);
        match self.rng.u8(0..100) {
            0..=39 => Op::PushBack(value),
            40..=59 => Op::Insert(self.rng.usize(0..=len), value),
            60..=74 if len > 0 => Op::Erase(self.rng.usize(0..len)),
            75..=82 if len > 0 => Op::PopBack,
            83..=90 => Op::Resize(self.rng.usize(0..=self.max_len)),
            91..=97 => Op::Reserve(self.rng.usize(0..=self.max_len * 2)),
            98..=99 => Op::Clear,
            _ => Op::PushBack(value),
        }
    }

    /// Produces `count` operations, tracking the length they lead to.
    pub fn sequence(&mut self, count: usize) -> Vec<Op> {
        let mut len = 0usize;
        let mut ops = Vec::with_capacity(count);
        for _ in 0..count {
            let op = self.next_op(len);
            len = match op {
                Op::PushBack(_) | Op::Insert(..) => len + 1,
                Op::Erase(_) | Op::PopBack => len - 1,
                Op::Resize(n) => n,
                Op::Reserve(_) => len,
                Op::Clear => 0,
            };
            ops.push(op);
        }
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_reproducible() {
        let a = OpGenerator::new(42, 64).sequence(200);
        let b = OpGenerator::new(42, 64).sequence(200);
        assert_eq!(a, b);
    }

    #[test]
    fn test_positions_in_range() {
        let mut generator = OpGenerator::new(7, 16);
        for len in 0..20 {
            for _ in 0..50 {
                match generator.next_op(len) {
                    Op::Insert(i, _) => assert!(i <= len),
                    Op::Erase(i) => assert!(i < len),
                    Op::PopBack => assert!(len > 0),
                    _ => {}
                }
            }
        }
    }
}
