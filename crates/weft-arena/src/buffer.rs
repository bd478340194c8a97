//! Real-memory pointer.

use weft_core::{Element, Pointer};

/// A pointer that exclusively owns a fixed-size, zero-initialised buffer.
///
/// Loads and stores go straight to memory. An offset at or beyond the
/// buffer length panics (slice bounds check) rather than reading
/// unrelated memory.
#[derive(Clone, Debug, PartialEq)]
pub struct BufferPointer<T> {
    data: Box<[T]>,
}

impl<T: Element> BufferPointer<T> {
    /// Allocate `len` elements, each `T::default()`.
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![T::default(); len].into_boxed_slice(),
        }
    }

    /// Take ownership of existing contents.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// The buffer in offset order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the buffer in offset order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Release the buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Element> From<Vec<T>> for BufferPointer<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Element> Pointer for BufferPointer<T> {
    type Value = T;

    #[inline]
    fn load(&self, offset: usize) -> T {
        self.data[offset]
    }

    #[inline]
    fn store(&mut self, offset: usize, value: T) {
        self.data[offset] = value;
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }
}

/// Allocate one zero-initialised buffer per entry of `counts`, in order.
pub fn allocate_multiple<T: Element>(counts: &[usize]) -> Vec<BufferPointer<T>> {
    counts.iter().map(|&n| BufferPointer::zeroed(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_buffer_reads_default() {
        let p = BufferPointer::<f32>::zeroed(4);
        assert_eq!(p.len(), 4);
        assert!((0..4).all(|i| p.load(i) == 0.0));
    }

    #[test]
    fn store_then_load() {
        let mut p = BufferPointer::<f64>::zeroed(3);
        p.store(2, 1.5);
        assert_eq!(p.load(2), 1.5);
        assert_eq!(p.as_slice(), &[0.0, 0.0, 1.5]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn load_past_end_panics() {
        let p = BufferPointer::<u32>::zeroed(2);
        p.load(2);
    }

    #[test]
    fn vector_elements_are_supported() {
        let mut p = BufferPointer::<[f32; 3]>::zeroed(2);
        p.store(1, [1.0, 2.0, 3.0]);
        assert_eq!(p.load(1), [1.0, 2.0, 3.0]);
        assert_eq!(p.load(0), [0.0; 3]);
    }

    #[test]
    fn allocate_multiple_preserves_order_and_sizes() {
        let ptrs = allocate_multiple::<f32>(&[3, 5, 2]);
        let lens: Vec<usize> = ptrs.iter().map(|p| p.capacity()).collect();
        assert_eq!(lens, vec![3, 5, 2]);
    }

    #[test]
    fn from_vec_keeps_contents() {
        let p: BufferPointer<i64> = vec![1, 2, 3].into();
        assert_eq!(p.into_vec(), vec![1, 2, 3]);
    }
}
