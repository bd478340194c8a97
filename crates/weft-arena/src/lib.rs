//! Pointer implementations and arena partitioning for weft.
//!
//! Two [`Pointer`](weft_core::Pointer) implementations:
//!
//! - [`BufferPointer`]: owns a zero-initialised buffer and performs real
//!   loads and stores.
//! - [`TracingPointer`]: owns nothing. Each access is forwarded to a
//!   [`MemoryModel`](weft_core::MemoryModel) as a byte address and size,
//!   and loads return a placeholder `T::default()`.
//!
//! # Architecture
//!
//! ```text
//! Arena<'m, M> (one logical address space over a memory model)
//! ├── Partitioner (bump cursor, rounds every region up to the alignment)
//! │   └── Region[] (declaration order, disjoint, increasing bases)
//! └── TracingPointer<'m, T, M> × N (one per region, borrows the model)
//! ```
//!
//! The real-memory counterpart of an arena is [`allocate_multiple`]: one
//! independent buffer per requested element count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod buffer;
pub mod config;
pub mod error;
pub mod partition;
pub mod traced;

pub use arena::Arena;
pub use buffer::{allocate_multiple, BufferPointer};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use partition::{partition, Partitioner, Region};
pub use traced::TracingPointer;
