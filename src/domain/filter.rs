//! Task filter predicate.

use crate::domain::task::{KanbanStatus, Quadrant, Task};

/// A filter for narrowing task queries.
///
/// All present constraints must hold for a task to match. An empty
/// search string and empty axis sets match every task.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title or description
    pub search: String,
    /// Statuses to keep; empty keeps all
    pub statuses: Vec<KanbanStatus>,
    /// Quadrants to keep; empty keeps all
    pub quadrants: Vec<Quadrant>,
}

impl TaskFilter {
    /// Filter on a search string only.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    /// Filter on a set of Kanban statuses only.
    pub fn statuses(statuses: impl Into<Vec<KanbanStatus>>) -> Self {
        Self {
            statuses: statuses.into(),
            ..Self::default()
        }
    }

    /// Filter on a set of quadrants only.
    pub fn quadrants(quadrants: impl Into<Vec<Quadrant>>) -> Self {
        Self {
            quadrants: quadrants.into(),
            ..Self::default()
        }
    }

    /// Check if a task matches this filter.
    pub fn matches(&self, task: &Task) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !task.title.to_lowercase().contains(&needle)
                && !task.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&task.kanban_status) {
            return false;
        }

        if !self.quadrants.is_empty() && !self.quadrants.contains(&task.quadrant) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::build_task;
    use crate::domain::task::NewTask;

    fn make_task(title: &str, description: &str, quadrant: Quadrant, status: KanbanStatus) -> Task {
        build_task(
            NewTask {
                title: title.to_string(),
                description: description.to_string(),
                quadrant,
                kanban_status: Some(status),
                due_date: None,
            },
            0,
        )
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let task = make_task("Anything", "", Quadrant::UrgentImportant, KanbanStatus::Todo);
        assert!(TaskFilter::default().matches(&task));
    }

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let task = make_task(
            "Write Quarterly Report",
            "",
            Quadrant::UrgentImportant,
            KanbanStatus::Todo,
        );
        assert!(TaskFilter::search("quarterly").matches(&task));
        assert!(!TaskFilter::search("annual").matches(&task));
    }

    #[test]
    fn test_search_matches_description() {
        let task = make_task(
            "Report",
            "covers the Berlin office",
            Quadrant::UrgentImportant,
            KanbanStatus::Todo,
        );
        assert!(TaskFilter::search("BERLIN").matches(&task));
    }

    #[test]
    fn test_status_set_filters() {
        let task = make_task("T", "", Quadrant::UrgentImportant, KanbanStatus::Review);
        assert!(TaskFilter::statuses([KanbanStatus::Review, KanbanStatus::Done]).matches(&task));
        assert!(!TaskFilter::statuses([KanbanStatus::Todo]).matches(&task));
    }

    #[test]
    fn test_quadrant_set_filters() {
        let task = make_task("T", "", Quadrant::NotUrgentImportant, KanbanStatus::Todo);
        assert!(TaskFilter::quadrants([Quadrant::NotUrgentImportant]).matches(&task));
        assert!(!TaskFilter::quadrants([Quadrant::UrgentImportant]).matches(&task));
    }

    #[test]
    fn test_all_constraints_must_hold() {
        let task = make_task(
            "Pay invoices",
            "",
            Quadrant::UrgentImportant,
            KanbanStatus::Todo,
        );

        let filter = TaskFilter {
            search: "invoices".to_string(),
            statuses: vec![KanbanStatus::Todo],
            quadrants: vec![Quadrant::UrgentImportant],
        };
        assert!(filter.matches(&task));

        let filter = TaskFilter {
            search: "invoices".to_string(),
            statuses: vec![KanbanStatus::Done],
            quadrants: vec![Quadrant::UrgentImportant],
        };
        assert!(!filter.matches(&task));
    }
}
