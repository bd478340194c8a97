//! Access-tracing pointer.

use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;

use weft_core::{Element, MemoryModel, Pointer};

/// A pointer that owns no storage and reports every access to a
/// [`MemoryModel`].
///
/// Offset `i` maps to byte address `base + i * size_of::<T>()`. A load
/// records a read of `size_of::<T>()` bytes and returns `T::default()`;
/// that value is a placeholder, so kernels traced through this pointer
/// produce the access stream of a real run but not its numbers. A store
/// records a write and discards the value.
pub struct TracingPointer<'m, T, M: ?Sized> {
    model: &'m M,
    base: u64,
    capacity: usize,
    _element: PhantomData<T>,
}

impl<'m, T: Element, M: MemoryModel + ?Sized> TracingPointer<'m, T, M> {
    /// A pointer over `capacity` elements starting at byte address `base`.
    pub fn new(model: &'m M, base: u64, capacity: usize) -> Self {
        Self {
            model,
            base,
            capacity,
            _element: PhantomData,
        }
    }

    /// Byte address of element 0.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Byte address of the element at `offset`.
    #[inline]
    pub fn address(&self, offset: usize) -> u64 {
        self.base + (offset as u64) * size_of::<T>() as u64
    }
}

impl<T: Element, M: MemoryModel + ?Sized> Pointer for TracingPointer<'_, T, M> {
    type Value = T;

    #[inline]
    fn load(&self, offset: usize) -> T {
        debug_assert!(
            offset < self.capacity,
            "offset {offset} beyond capacity {}",
            self.capacity
        );
        self.model
            .record_access(self.address(offset), size_of::<T>(), false);
        T::default()
    }

    #[inline]
    fn store(&mut self, offset: usize, _value: T) {
        debug_assert!(
            offset < self.capacity,
            "offset {offset} beyond capacity {}",
            self.capacity
        );
        self.model
            .record_access(self.address(offset), size_of::<T>(), true);
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T, M: ?Sized> fmt::Debug for TracingPointer<'_, T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracingPointer")
            .field("base", &self.base)
            .field("capacity", &self.capacity)
            .field("element_size", &size_of::<T>())
            .finish()
    }
}
