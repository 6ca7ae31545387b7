//! taskgrid - task store for a combined Kanban / Eisenhower tracker
//!
//! Tasks live on two orthogonal views at once: a Kanban workflow board
//! and an Eisenhower priority matrix, both reading from one shared
//! ordered collection. This crate is that collection: the task model,
//! CRUD/query/reorder operations over a single global ordering, and a
//! debounced write-through to a pluggable key-value storage backend.

pub mod codec;
pub mod domain;
pub mod error;
pub mod id;
pub mod storage;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{StoreConfig, TaskStore, DEBOUNCE_DELAY, STORAGE_KEY};
