//! Tracing arenas: one logical address space, many pointers.

use std::mem::size_of;

use weft_core::{Element, MemoryModel};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::partition::{Partitioner, Region};
use crate::traced::TracingPointer;

/// Hands out [`TracingPointer`]s over disjoint, aligned regions of one
/// logical address space, all reporting to the same memory model.
///
/// Regions are placed in call order. The pointers borrow the model, not
/// the arena, so they outlive further allocations.
pub struct Arena<'m, M: MemoryModel + ?Sized> {
    model: &'m M,
    partitioner: Partitioner,
}

impl<'m, M: MemoryModel + ?Sized> Arena<'m, M> {
    /// Empty arena over `model`.
    pub fn new(model: &'m M, config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            model,
            partitioner: Partitioner::new(config.alignment)?,
        })
    }

    /// Reserve the next region for `count` elements of `T`.
    pub fn allocate<T: Element>(
        &mut self,
        count: usize,
    ) -> Result<TracingPointer<'m, T, M>, ArenaError> {
        let region = self.partitioner.place(size_of::<T>(), count)?;
        tracing::debug!(
            base = region.base,
            element_size = region.element_size,
            count,
            "arena region placed"
        );
        Ok(TracingPointer::new(self.model, region.base, count))
    }

    /// Reserve one region per entry of `counts`, in order.
    pub fn partition<T: Element>(
        &mut self,
        counts: &[usize],
    ) -> Result<Vec<TracingPointer<'m, T, M>>, ArenaError> {
        counts.iter().map(|&n| self.allocate(n)).collect()
    }

    /// Regions placed so far.
    pub fn regions(&self) -> &[Region] {
        self.partitioner.regions()
    }

    /// The configured alignment in bytes.
    pub fn alignment(&self) -> u64 {
        self.partitioner.alignment()
    }
}
