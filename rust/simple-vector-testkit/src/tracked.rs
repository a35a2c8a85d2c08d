//! Element types with observable lifecycles.

use std::cell::Cell;
use std::rc::Rc;

/// Shared counters for every [`Tracked`] value created through it.
#[derive(Clone, Default)]
pub struct DropLedger(Rc<Counters>);

#[derive(Default)]
struct Counters {
    created: Cell<usize>,
    clones: Cell<usize>,
    drops: Cell<usize>,
}

impl DropLedger {
    pub fn new() -> DropLedger {
        Self::default()
    }

    /// Creates a tracked value attached to this ledger.
    pub fn track(&self, value: i64) -> Tracked {
        bump(&self.0.created);
        Tracked {
            value,
            ledger: Some(self.clone()),
        }
    }

    /// Values created (including clones) and not dropped yet.
    pub fn live(&self) -> usize {
        self.0.created.get() - self.0.drops.get()
    }

    pub fn created(&self) -> usize {
        self.0.created.get()
    }

    pub fn clones(&self) -> usize {
        self.0.clones.get()
    }

    pub fn drops(&self) -> usize {
        self.0.drops.get()
    }
}

impl std::fmt::Debug for DropLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropLedger")
            .field("created", &self.created())
            .field("clones", &self.clones())
            .field("drops", &self.drops())
            .finish()
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

/// A value whose clones and drops are recorded in a [`DropLedger`].
///
/// `Tracked::default()` is detached from any ledger, so the default values
/// that fill spare buffer slots do not disturb the counts.
#[derive(Default)]
pub struct Tracked {
    value: i64,
    ledger: Option<DropLedger>,
}

impl Tracked {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_tracked(&self) -> bool {
        self.ledger.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(ledger) = &self.ledger {
            bump(&ledger.0.created);
            bump(&ledger.0.clones);
        }
        Tracked {
            value: self.value,
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(ledger) = &self.ledger {
            bump(&ledger.0.drops);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl std::fmt::Debug for Tracked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// A value that can only be moved.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoveOnly(pub u32);

/// A value whose clone panics once a shared fuse burns down.
///
/// Every clone of a fused value decrements the fuse; the clone that finds it
/// at zero panics. `CloneBomb::default()` has no fuse and always clones.
#[derive(Debug, Default)]
pub struct CloneBomb {
    pub value: u32,
    fuse: Option<Rc<Cell<usize>>>,
}

impl CloneBomb {
    /// Creates a value attached to `fuse`; see [`CloneBomb::fuse`].
    pub fn armed(value: u32, fuse: &Rc<Cell<usize>>) -> CloneBomb {
        CloneBomb {
            value,
            fuse: Some(fuse.clone()),
        }
    }

    /// Creates a fuse allowing `clones` successful clones.
    pub fn fuse(clones: usize) -> Rc<Cell<usize>> {
        Rc::new(Cell::new(clones))
    }
}

impl Clone for CloneBomb {
    fn clone(&self) -> Self {
        if let Some(fuse) = &self.fuse {
            let left = fuse.get();
            if left == 0 {
                panic!("CloneBomb({}) went off", self.value);
            }
            fuse.set(left - 1);
        }
        CloneBomb {
            value: self.value,
            fuse: self.fuse.clone(),
        }
    }
}

impl PartialEq for CloneBomb {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_counts() {
        let ledger = DropLedger::new();
        let a = ledger.track(1);
        let b = a.clone();
        assert_eq!(ledger.created(), 2);
        assert_eq!(ledger.clones(), 1);
        drop(a);
        assert_eq!(ledger.live(), 1);
        drop(b);
        assert_eq!(ledger.live(), 0);
        assert_eq!(ledger.drops(), 2);
    }

    #[test]
    fn test_default_is_untracked() {
        let t = Tracked::default();
        assert!(!t.is_tracked());
        assert_eq!(t.value(), 0);
    }

    #[test]
    fn test_clone_bomb_fuse() {
        let fuse = CloneBomb::fuse(1);
        let bomb = CloneBomb::armed(7, &fuse);
        let copy = bomb.clone();
        assert_eq!(copy.value, 7);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| bomb.clone()));
        assert!(result.is_err());
    }
}
