//! Serialization utilities for tasks
//!
//! Converts between the in-memory [`Task`] and its storage-facing twin
//! [`SerializedTask`], and builds new tasks from creation payloads. The
//! stored form uses camelCase field names, RFC 3339 timestamps, and a
//! due date that is absent (not null) when the task has none.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{KanbanStatus, NewTask, Quadrant, Task};
use crate::error::Result;
use crate::id::generate_task_id;

/// Storage-facing representation of a task
///
/// Identical to [`Task`] except the three time-valued fields are
/// RFC 3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub quadrant: Quadrant,
    pub kanban_status: KanbanStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub order: usize,
}

/// Convert a task to its storage form.
pub fn serialize_task(task: &Task) -> SerializedTask {
    SerializedTask {
        id: task.id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        quadrant: task.quadrant,
        kanban_status: task.kanban_status,
        due_date: task.due_date.map(|d| d.to_rfc3339()),
        created_at: task.created_at.to_rfc3339(),
        updated_at: task.updated_at.to_rfc3339(),
        order: task.order,
    }
}

/// Convert a stored task back to the in-memory form.
///
/// Fails with [`crate::StoreError::Timestamp`] when a timestamp field
/// does not parse.
pub fn deserialize_task(data: &SerializedTask) -> Result<Task> {
    Ok(Task {
        id: data.id.clone(),
        title: data.title.clone(),
        description: data.description.clone(),
        quadrant: data.quadrant,
        kanban_status: data.kanban_status,
        due_date: match &data.due_date {
            Some(raw) => Some(parse_timestamp(raw)?),
            None => None,
        },
        created_at: parse_timestamp(&data.created_at)?,
        updated_at: parse_timestamp(&data.updated_at)?,
        order: data.order,
    })
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

/// Build a new task from a creation payload and a caller-supplied order.
///
/// Assigns a fresh id, defaults the Kanban status to Todo, and stamps
/// both timestamps with the same instant.
pub fn build_task(payload: NewTask, order: usize) -> Task {
    let now = Utc::now();
    Task {
        id: generate_task_id(),
        title: payload.title,
        description: payload.description,
        quadrant: payload.quadrant,
        kanban_status: payload.kanban_status.unwrap_or(KanbanStatus::Todo),
        due_date: payload.due_date,
        created_at: now,
        updated_at: now,
        order,
    }
}
