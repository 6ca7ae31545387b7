//! Task store - the authoritative in-memory collection.
//!
//! The store owns the canonical task list and serves every mutation and
//! query synchronously. Persisted storage is a derived mirror, refreshed
//! by a debounced write-through: each mutation arms a quiet-period
//! deadline, and the host's event loop pumps [`TaskStore::tick`] to fire
//! it. A one-time [`TaskStore::hydrate`] at startup loads the mirror
//! back into memory.
//!
//! Storage failures never reach the caller; they are logged and the
//! in-memory state stays authoritative.

mod debounce;

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, warn};

use crate::codec::{build_task, deserialize_task, serialize_task, SerializedTask};
use crate::domain::{KanbanStatus, NewTask, Quadrant, Task, TaskFilter, TaskPatch};
use crate::error::Result;
use crate::storage::StorageBackend;
use debounce::PersistScheduler;

/// Storage key the task list is persisted under.
pub const STORAGE_KEY: &str = "eisenhower-kanban-tasks";

/// Default quiet period before a scheduled persist fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Store tuning knobs.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Key the serialized task list is written under
    pub storage_key: String,
    /// Quiet period between the last mutation and the persist
    pub debounce_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            debounce_delay: DEBOUNCE_DELAY,
        }
    }
}

impl StoreConfig {
    /// Override the debounce delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }
}

/// The task store.
///
/// Owns the in-memory list; only its methods mutate it. Single-writer
/// by construction: every mutation takes `&mut self` and runs to
/// completion. Instantiable, so independent stores can coexist (one per
/// test, one per window).
pub struct TaskStore<B: StorageBackend> {
    tasks: Vec<Task>,
    initialized: bool,
    backend: B,
    config: StoreConfig,
    scheduler: PersistScheduler,
}

impl<B: StorageBackend> TaskStore<B> {
    /// Create a store over the given backend with default config.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, StoreConfig::default())
    }

    /// Create a store with explicit config.
    pub fn with_config(backend: B, config: StoreConfig) -> Self {
        let scheduler = PersistScheduler::new(config.debounce_delay);
        Self {
            tasks: Vec::new(),
            initialized: false,
            backend,
            config,
            scheduler,
        }
    }

    //=== CRUD ===

    /// Add a new task at the end of the global ordering.
    ///
    /// The new order is one past the current maximum (0 for an empty
    /// store). Schedules persistence and returns the created task.
    pub fn add_task(&mut self, payload: NewTask) -> Task {
        let order = self
            .tasks
            .iter()
            .map(|t| t.order)
            .max()
            .map_or(0, |max| max + 1);

        let task = build_task(payload, order);
        self.tasks.push(task.clone());
        self.schedule_persist();
        task
    }

    /// Merge a patch over the task with the given id.
    ///
    /// Returns None without touching state or scheduling persistence
    /// when the id is unknown. Otherwise stamps `updated_at` and
    /// returns the updated task.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;

        patch.apply(task);
        task.updated_at = Utc::now();
        let updated = task.clone();

        self.schedule_persist();
        Some(updated)
    }

    /// Remove the task with the given id.
    ///
    /// Remaining tasks are reindexed to close the order gap, keeping
    /// their relative sequence. Returns whether a task was removed;
    /// unknown ids change nothing and schedule nothing.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };

        self.tasks.remove(index);
        self.reindex();
        self.schedule_persist();
        true
    }

    /// Look up a task by id.
    pub fn get_task(&self, id: &str) -> Option<Task> {
        self.tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Move a task to `target` within the single global sequence.
    ///
    /// The target is clamped to the valid range; every task's order is
    /// reindexed to match its new position. Reordering ignores quadrant
    /// and status, both views share the one sequence.
    pub fn reorder_task(&mut self, id: &str, target: usize) {
        if let Some(index) = self.tasks.iter().position(|t| t.id == id) {
            let task = self.tasks.remove(index);
            let target = target.min(self.tasks.len());
            self.tasks.insert(target, task);
            self.reindex();
        }
        self.schedule_persist();
    }

    /// Rewrite orders to match current list positions.
    fn reindex(&mut self) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.order = index;
        }
    }

    //=== Queries ===

    /// All tasks in a quadrant, ascending by order.
    pub fn list_by_quadrant(&self, quadrant: Quadrant) -> Vec<Task> {
        self.list_where(|t| t.quadrant == quadrant)
    }

    /// All tasks in a Kanban stage, ascending by order.
    pub fn list_by_status(&self, status: KanbanStatus) -> Vec<Task> {
        self.list_where(|t| t.kanban_status == status)
    }

    /// Every task, ascending by order.
    pub fn list_all(&self) -> Vec<Task> {
        self.list_where(|_| true)
    }

    /// Tasks matching a filter, ascending by order.
    pub fn list_filtered(&self, filter: &TaskFilter) -> Vec<Task> {
        self.list_where(|t| filter.matches(t))
    }

    fn list_where(&self, keep: impl Fn(&Task) -> bool) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.iter().filter(|t| keep(t)).cloned().collect();
        tasks.sort_by_key(|t| t.order);
        tasks
    }

    //=== Status synchronization ===

    /// Move a task to another Kanban stage.
    ///
    /// Convenience wrapper over [`TaskStore::update_task`] with a
    /// status-only patch.
    pub fn update_kanban_status(&mut self, id: &str, status: KanbanStatus) -> Option<Task> {
        self.update_task(id, TaskPatch::status(status))
    }

    //=== Persistence ===

    /// Serialize the full task list and write it to the backend now.
    ///
    /// Failures are logged and swallowed; in-memory state is never
    /// rolled back.
    pub fn persist(&mut self) {
        let serialized: Vec<SerializedTask> = self.tasks.iter().map(serialize_task).collect();

        let json = match serde_json::to_string(&serialized) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to encode tasks for storage");
                return;
            }
        };

        match self.backend.set(&self.config.storage_key, &json) {
            Ok(()) => debug!(count = self.tasks.len(), "persisted tasks"),
            Err(e) => warn!(error = %e, "failed to persist tasks"),
        }
    }

    /// Fire the debounce deadline if it has elapsed.
    ///
    /// The host's event loop pumps this; when a quiet period ends it
    /// runs [`TaskStore::persist`] exactly once, reading the state at
    /// fire time. Returns whether a persist ran.
    pub fn tick(&mut self) -> bool {
        if self.scheduler.fire_due(Instant::now()) {
            self.persist();
            true
        } else {
            false
        }
    }

    /// Cancel any pending deadline and persist immediately.
    ///
    /// Shutdown hook for hosts that want to close the lossy-write
    /// window.
    pub fn flush(&mut self) {
        self.scheduler.cancel();
        self.persist();
    }

    /// Load the persisted task list into memory.
    ///
    /// Absent storage leaves the list empty; malformed data or a
    /// failing backend is logged and treated the same. Every outcome
    /// marks the store initialized. Call once at startup.
    pub fn hydrate(&mut self) {
        match self.load() {
            Ok(Some(tasks)) => {
                debug!(count = tasks.len(), "hydrated tasks");
                self.tasks = tasks;
            }
            Ok(None) => debug!("no persisted tasks"),
            Err(e) => warn!(error = %e, "failed to hydrate tasks, starting empty"),
        }
        self.initialized = true;
    }

    fn load(&self) -> Result<Option<Vec<Task>>> {
        let Some(raw) = self.backend.get(&self.config.storage_key)? else {
            return Ok(None);
        };

        let serialized: Vec<SerializedTask> = serde_json::from_str(&raw)?;
        let mut tasks = serialized
            .iter()
            .map(deserialize_task)
            .collect::<Result<Vec<Task>>>()?;
        tasks.sort_by_key(|t| t.order);
        Ok(Some(tasks))
    }

    /// Delete the persisted entry and reset the in-memory list.
    ///
    /// Also disarms any pending deadline so a stale write cannot
    /// recreate the entry. Marks the store initialized.
    pub fn clear_storage(&mut self) {
        if let Err(e) = self.backend.remove(&self.config.storage_key) {
            warn!(error = %e, "failed to clear persisted tasks");
        }
        self.tasks.clear();
        self.scheduler.cancel();
        self.initialized = true;
    }

    fn schedule_persist(&mut self) {
        self.scheduler.schedule(Instant::now());
    }

    //=== Introspection ===

    /// True once hydrate or clear_storage has run.
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// True while a debounced persist is waiting to fire.
    pub fn persist_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Number of tasks in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True if the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The underlying storage backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the underlying storage backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
