//! A non-contiguous slot sequence and its sequential cursor.
//!
//! [`SlotChain`] links heap nodes one after another, so neighbouring slots
//! are not adjacent in memory. [`ChainCursor`] walks it one node at a time
//! and reports no random-access capability, which is what the per-element
//! strategies have to cope with.

use std::fmt;
use std::mem::MaybeUninit;
use std::ptr;

use emplace_core::{Cursor, NotRandomAccess};

// `value` first, so a node pointer is also the slot pointer.
#[repr(C)]
struct Node<T> {
    value: MaybeUninit<T>,
    next: *mut Node<T>,
}

/// Singly linked chain of slots whose first `init` slots are initialized.
pub struct SlotChain<T> {
    head: *mut Node<T>,
    len: usize,
    init: usize,
}

impl<T> SlotChain<T> {
    /// A chain of `len` raw slots.
    pub fn with_slots(len: usize) -> Self {
        let mut head = ptr::null_mut();
        for _ in 0..len {
            head = Box::into_raw(Box::new(Node {
                value: MaybeUninit::uninit(),
                next: head,
            }));
        }
        Self { head, len, init: 0 }
    }

    /// A chain holding clones of `values`, fully initialized.
    pub fn from_values(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut chain = Self::with_slots(values.len());
        let mut node = chain.head;
        for value in values {
            // SAFETY: the chain has exactly `values.len()` nodes.
            unsafe {
                (*node).value.write(value.clone());
                node = (*node).next;
            }
            chain.init += 1;
        }
        chain
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn begin(&self) -> ChainCursor<T> {
        ChainCursor { node: self.head }
    }

    pub fn end(&self) -> ChainCursor<T> {
        ChainCursor {
            node: ptr::null_mut(),
        }
    }

    /// Declare the first `init` slots initialized.
    ///
    /// # Safety
    ///
    /// `init <= len` and slots `[0, init)` hold live values.
    pub unsafe fn set_init(&mut self, init: usize) {
        debug_assert!(init <= self.len);
        self.init = init;
    }

    /// The initialized values, in chain order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut node = self.head;
        (0..self.init).map(move |_| {
            // SAFETY: the first `init` nodes exist and are initialized.
            unsafe {
                let value = (*node).value.assume_init_ref();
                node = (*node).next;
                value
            }
        })
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for SlotChain<T> {
    fn drop(&mut self) {
        let mut node = self.head;
        let mut index = 0;
        while !node.is_null() {
            // SAFETY: every node came from `Box::into_raw` and is freed
            // once; only the first `init` hold live values.
            unsafe {
                let mut boxed = Box::from_raw(node);
                if index < self.init {
                    boxed.value.assume_init_drop();
                }
                node = boxed.next;
            }
            index += 1;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Sequential cursor over a [`SlotChain`]. The end position is the null
/// node.
pub struct ChainCursor<T> {
    node: *mut Node<T>,
}

impl<T> Clone for ChainCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ChainCursor<T> {}

impl<T> PartialEq for ChainCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.node, other.node)
    }
}

impl<T> fmt::Debug for ChainCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChainCursor").field(&self.node).finish()
    }
}

// SAFETY: a node pointer is the address of its slot (`repr(C)`, value
// first); distinct nodes are distinct positions; no random-access form.
unsafe impl<T> Cursor for ChainCursor<T> {
    type Value = T;
    type RandomAccess = NotRandomAccess<T>;
    const RANDOM_ACCESS: bool = false;

    fn slot(&self) -> *mut T {
        self.node.cast::<T>()
    }

    unsafe fn advance(&mut self) {
        // SAFETY: not at the end, so `node` is a live node.
        self.node = unsafe { (*self.node).next };
    }

    fn into_random_access(self) -> Result<NotRandomAccess<T>, Self> {
        Err(self)
    }

    fn from_random_access(cursor: NotRandomAccess<T>) -> Self {
        cursor.absurd()
    }
}
