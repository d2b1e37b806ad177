//! Instrumented element types.
//!
//! - [`Tracked`]: an owning value whose clones and drops are recorded in a
//!   shared [`Ledger`]. A ledger can be armed to make a clone panic.
//! - [`Probe`]: a trivially copyable value that counts `Clone` calls, so
//!   tests can tell bitwise duplication from cloning.
//! - [`Marker`]: a zero-sized counterpart of [`Probe`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use emplace_core::{element, trivially_copyable};
use smallvec::SmallVec;

#[derive(Default)]
struct LedgerState {
    clones: SmallVec<[u32; 16]>,
    drops: usize,
    fail_after: Option<usize>,
}

/// Shared record of every clone and drop of the [`Tracked`] values it
/// issued.
///
/// Cloning the ledger gives another handle to the same record.
#[derive(Clone, Default)]
pub struct Ledger {
    state: Rc<RefCell<LedgerState>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger whose tracked values panic on the clone following the
    /// first `n` successful ones.
    pub fn failing_after(n: usize) -> Self {
        let ledger = Self::new();
        ledger.state.borrow_mut().fail_after = Some(n);
        ledger
    }

    /// Issue a value recorded by this ledger.
    pub fn track(&self, id: u32, payload: &str) -> Tracked {
        Tracked {
            id,
            payload: payload.to_owned(),
            ledger: self.clone(),
        }
    }

    /// Ids of the cloned values, in clone order.
    pub fn clones(&self) -> Vec<u32> {
        self.state.borrow().clones.to_vec()
    }

    pub fn clone_count(&self) -> usize {
        self.state.borrow().clones.len()
    }

    pub fn drop_count(&self) -> usize {
        self.state.borrow().drops
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Ledger")
            .field("clones", &state.clones.as_slice())
            .field("drops", &state.drops)
            .field("fail_after", &state.fail_after)
            .finish()
    }
}

/// An owning value with observable duplication.
pub struct Tracked {
    id: u32,
    payload: String,
    ledger: Ledger,
}

impl Tracked {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        {
            let mut state = self.ledger.state.borrow_mut();
            if state.fail_after == Some(state.clones.len()) {
                drop(state);
                panic!("clone of tracked value {} failed", self.id);
            }
            state.clones.push(self.id);
        }
        Self {
            id: self.id,
            payload: self.payload.clone(),
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.state.borrow_mut().drops += 1;
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.payload == other.payload
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("id", &self.id)
            .field("payload", &self.payload)
            .finish()
    }
}

element!(Tracked);

thread_local! {
    static PROBE_CLONES: Cell<usize> = const { Cell::new(0) };
    static MARKER_CLONES: Cell<usize> = const { Cell::new(0) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<usize>>) {
    counter.with(|c| c.set(c.get() + 1));
}

/// Trivially copyable value that counts explicit `Clone` calls on the
/// current thread.
#[derive(Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Probe(pub u64);

#[allow(clippy::expl_impl_clone_on_copy)]
impl Clone for Probe {
    fn clone(&self) -> Self {
        bump(&PROBE_CLONES);
        *self
    }
}

impl Probe {
    pub fn clones() -> usize {
        PROBE_CLONES.with(Cell::get)
    }

    pub fn reset_clones() {
        PROBE_CLONES.with(|c| c.set(0));
    }
}

trivially_copyable!(Probe);

/// Zero-sized value that counts `Clone` calls on the current thread.
#[derive(Debug, PartialEq, Eq)]
pub struct Marker;

impl Clone for Marker {
    fn clone(&self) -> Self {
        bump(&MARKER_CLONES);
        Marker
    }
}

impl Marker {
    pub fn clones() -> usize {
        MARKER_CLONES.with(Cell::get)
    }

    pub fn reset_clones() {
        MARKER_CLONES.with(|c| c.set(0));
    }
}

element!(Marker);

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn ledger_records_clones_and_drops() {
        let ledger = Ledger::new();
        let a = ledger.track(7, "seven");
        let b = a.clone();
        assert_eq!(b.payload(), "seven");
        assert_eq!(ledger.clones(), vec![7]);
        drop(a);
        drop(b);
        assert_eq!(ledger.drop_count(), 2);
    }

    #[test]
    fn failing_ledger_panics_on_schedule() {
        let ledger = Ledger::failing_after(1);
        let a = ledger.track(1, "x");
        let first = a.clone();
        let second = panic::catch_unwind(AssertUnwindSafe(|| a.clone()));
        assert!(second.is_err());
        assert_eq!(ledger.clone_count(), 1);
        drop(first);
    }

    #[test]
    fn probe_counts_only_explicit_clones() {
        Probe::reset_clones();
        let p = Probe(1);
        let copied = p;
        #[allow(clippy::clone_on_copy)]
        let cloned = p.clone();
        assert_eq!(copied, cloned);
        assert_eq!(Probe::clones(), 1);
    }

    #[test]
    fn marker_is_zero_sized() {
        assert_eq!(std::mem::size_of::<Marker>(), 0);
        Marker::reset_clones();
        let _ = Marker.clone();
        assert_eq!(Marker::clones(), 1);
    }
}
