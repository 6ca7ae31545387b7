//! Task record and related types
//!
//! A Task lives on two orthogonal views at once: an Eisenhower priority
//! matrix (quadrant axis) and a Kanban workflow (status axis). Neither
//! axis constrains the other. All tasks share one global `order`
//! sequence used for stable list rendering and manual drag-reorder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The core Task struct, sole entity of the store
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    //=== Identity ===
    /// Unique identifier ("task_1738300800123_9f86d081884c7d65")
    pub id: String,

    //=== Content ===
    /// Non-empty display string
    pub title: String,

    /// Free-form details, may be empty
    pub description: String,

    //=== Axes ===
    /// Eisenhower matrix placement
    pub quadrant: Quadrant,

    /// Kanban workflow stage
    pub kanban_status: KanbanStatus,

    //=== Scheduling ===
    pub due_date: Option<DateTime<Utc>>,

    //=== Timestamps ===
    /// Set once at creation
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,

    //=== Ordering ===
    /// Position in the single global sequence shared by all tasks;
    /// the store keeps these contiguous from 0
    pub order: usize,
}

/// The four Eisenhower matrix quadrants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    UrgentImportant,
    NotUrgentImportant,
    UrgentNotImportant,
    NotUrgentNotImportant,
}

impl Quadrant {
    /// All quadrants in matrix display order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UrgentImportant,
        Quadrant::NotUrgentImportant,
        Quadrant::UrgentNotImportant,
        Quadrant::NotUrgentNotImportant,
    ];

    /// Stable string form, matching the stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::UrgentImportant => "urgent_important",
            Quadrant::NotUrgentImportant => "not_urgent_important",
            Quadrant::UrgentNotImportant => "urgent_not_important",
            Quadrant::NotUrgentNotImportant => "not_urgent_not_important",
        }
    }

    /// Eisenhower action name for matrix headers
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::UrgentImportant => "Do First",
            Quadrant::NotUrgentImportant => "Schedule",
            Quadrant::UrgentNotImportant => "Delegate",
            Quadrant::NotUrgentNotImportant => "Eliminate",
        }
    }
}

/// The four Kanban workflow stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KanbanStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl KanbanStatus {
    /// All statuses in board column order
    pub const ALL: [KanbanStatus; 4] = [
        KanbanStatus::Todo,
        KanbanStatus::InProgress,
        KanbanStatus::Review,
        KanbanStatus::Done,
    ];

    /// Stable string form, matching the stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            KanbanStatus::Todo => "todo",
            KanbanStatus::InProgress => "in_progress",
            KanbanStatus::Review => "review",
            KanbanStatus::Done => "done",
        }
    }
}

/// Creation payload for a new task
///
/// Identity, timestamps, and order are assigned by the store, not the
/// caller.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub quadrant: Quadrant,
    /// Defaults to [`KanbanStatus::Todo`] when omitted
    pub kanban_status: Option<KanbanStatus>,
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update payload, applied field-by-field over an existing task
///
/// `None` fields leave the task untouched. `due_date` is doubly
/// optional: `Some(None)` clears an existing due date, `None` keeps it.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub quadrant: Option<Quadrant>,
    pub kanban_status: Option<KanbanStatus>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Patch that only moves a task to another Kanban stage
    pub fn status(status: KanbanStatus) -> Self {
        Self {
            kanban_status: Some(status),
            ..Self::default()
        }
    }

    /// Overwrite the task's fields with the patch's present fields
    ///
    /// Does not stamp `updated_at`; the store owns timestamps.
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(quadrant) = self.quadrant {
            task.quadrant = quadrant;
        }
        if let Some(status) = self.kanban_status {
            task.kanban_status = status;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
    }
}
