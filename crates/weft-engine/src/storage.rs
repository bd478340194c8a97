//! Where a run's operands live: an arena over a memory model, or the heap.

use weft_arena::{Arena, BufferPointer, TracingPointer};
use weft_core::{MemoryModel, Pointer, Scalar, Vec3};

use crate::error::ExperimentError;

/// Hands out one pointer per operand, in request order.
pub(crate) trait Storage<T: Scalar> {
    type Scalars: Pointer<Value = T>;
    type Vectors: Pointer<Value = Vec3<T>>;

    fn scalars(&mut self, count: usize) -> Result<Self::Scalars, ExperimentError>;

    fn vectors(&mut self, count: usize) -> Result<Self::Vectors, ExperimentError>;
}

impl<'m, T: Scalar, M: MemoryModel + ?Sized> Storage<T> for Arena<'m, M> {
    type Scalars = TracingPointer<'m, T, M>;
    type Vectors = TracingPointer<'m, Vec3<T>, M>;

    fn scalars(&mut self, count: usize) -> Result<Self::Scalars, ExperimentError> {
        Ok(self.allocate(count)?)
    }

    fn vectors(&mut self, count: usize) -> Result<Self::Vectors, ExperimentError> {
        Ok(self.allocate(count)?)
    }
}

/// Independent zero-initialised heap buffers.
pub(crate) struct Heap;

impl<T: Scalar> Storage<T> for Heap {
    type Scalars = BufferPointer<T>;
    type Vectors = BufferPointer<Vec3<T>>;

    fn scalars(&mut self, count: usize) -> Result<Self::Scalars, ExperimentError> {
        Ok(BufferPointer::zeroed(count))
    }

    fn vectors(&mut self, count: usize) -> Result<Self::Vectors, ExperimentError> {
        Ok(BufferPointer::zeroed(count))
    }
}
