//! Test utilities and mock memory models for weft development.
//!
//! Provides two [`MemoryModel`] implementations for observing what a
//! tracing pointer emits, and seeded fixtures (in [`fixtures`]) for
//! filling arrays with reproducible values.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::{Cell, RefCell};

use weft_core::MemoryModel;

pub use fixtures::*;

/// One access as seen by a memory model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Access {
    pub address: u64,
    pub size: usize,
    pub is_store: bool,
}

impl Access {
    pub fn load(address: u64, size: usize) -> Self {
        Self {
            address,
            size,
            is_store: false,
        }
    }

    pub fn store(address: u64, size: usize) -> Self {
        Self {
            address,
            size,
            is_store: true,
        }
    }
}

/// Records every access in order.
///
/// Use for asserting exact traces. For long kernels prefer
/// [`CountingModel`].
#[derive(Debug, Default)]
pub struct RecordingModel {
    accesses: RefCell<Vec<Access>>,
}

impl RecordingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded trace.
    pub fn accesses(&self) -> Vec<Access> {
        self.accesses.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.accesses.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accesses.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.accesses.borrow_mut().clear();
    }

    /// Distinct addresses touched, in first-touch order.
    pub fn distinct_addresses(&self) -> Vec<u64> {
        let mut seen = std::collections::HashSet::new();
        self.accesses
            .borrow()
            .iter()
            .filter(|a| seen.insert(a.address))
            .map(|a| a.address)
            .collect()
    }
}

impl MemoryModel for RecordingModel {
    fn record_access(&self, address: u64, size: usize, is_store: bool) {
        self.accesses.borrow_mut().push(Access {
            address,
            size,
            is_store,
        });
    }
}

/// Counts loads, stores, and bytes moved.
#[derive(Debug, Default)]
pub struct CountingModel {
    loads: Cell<u64>,
    stores: Cell<u64>,
    bytes: Cell<u64>,
}

impl CountingModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loads(&self) -> u64 {
        self.loads.get()
    }

    pub fn stores(&self) -> u64 {
        self.stores.get()
    }

    pub fn bytes(&self) -> u64 {
        self.bytes.get()
    }

    pub fn total(&self) -> u64 {
        self.loads() + self.stores()
    }
}

impl MemoryModel for CountingModel {
    fn record_access(&self, _address: u64, size: usize, is_store: bool) {
        let counter = if is_store { &self.stores } else { &self.loads };
        counter.set(counter.get() + 1);
        self.bytes.set(self.bytes.get() + size as u64);
    }
}
