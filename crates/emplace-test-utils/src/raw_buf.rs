//! Owned uninitialized storage with an initialized prefix.

use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

/// Fixed-capacity buffer whose first `len` slots are initialized.
///
/// Tests construct into the raw tail with the emplace primitives, then
/// publish the written slots with [`set_len`](RawBuf::set_len). Dropping
/// the buffer drops exactly the initialized prefix.
pub struct RawBuf<T> {
    slots: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> RawBuf<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to slot 0.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast::<T>()
    }

    /// Pointer pair covering the `n` raw slots after the initialized
    /// prefix.
    ///
    /// # Panics
    ///
    /// If fewer than `n` raw slots remain.
    pub fn spare_range(&mut self, n: usize) -> (*mut T, *mut T) {
        assert!(
            self.len + n <= self.capacity(),
            "spare_range({n}) exceeds capacity {} with {} slots initialized",
            self.capacity(),
            self.len
        );
        let begin = self.as_mut_ptr().wrapping_add(self.len);
        (begin, begin.wrapping_add(n))
    }

    /// Declare the first `len` slots initialized.
    ///
    /// # Safety
    ///
    /// `len <= capacity` and slots `[0, len)` hold live values.
    pub unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len) }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // SAFETY: exactly the initialized prefix, dropped once.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ledger, Tracked};

    #[test]
    fn drops_only_the_initialized_prefix() {
        let ledger = Ledger::new();
        let mut buf = RawBuf::<Tracked>::with_capacity(4);
        let (begin, _) = buf.spare_range(2);
        // SAFETY: two raw slots.
        unsafe {
            begin.write(ledger.track(0, "a"));
            begin.add(1).write(ledger.track(1, "b"));
            buf.set_len(2);
        }
        assert_eq!(buf.len(), 2);
        drop(buf);
        assert_eq!(ledger.drop_count(), 2);
    }

    #[test]
    #[should_panic(expected = "exceeds capacity")]
    fn spare_range_checks_capacity() {
        let mut buf = RawBuf::<u8>::with_capacity(2);
        buf.spare_range(3);
    }
}
