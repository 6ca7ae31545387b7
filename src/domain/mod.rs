//! Domain types for taskgrid
//!
//! This module contains all core domain types:
//! - Task: the sole entity, placed on two orthogonal axes
//! - Quadrant / KanbanStatus: the Eisenhower and workflow axes
//! - NewTask / TaskPatch: creation and partial-update payloads
//! - TaskFilter: search/axis predicate for narrowing queries

pub mod filter;
pub mod task;

pub use filter::TaskFilter;
pub use task::{KanbanStatus, NewTask, Quadrant, Task, TaskPatch};
