use chrono::{DateTime, Utc};

/// A to-do item.
///
/// Every field is optional: a missing value means "not provided" and is
/// distinct from an empty string or `false`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Task {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
}

impl Task {
    /// Storage key. An unassigned id is stored as 0.
    pub fn key(&self) -> i64 {
        self.id.unwrap_or(0)
    }

    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn note_or_default(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

/// Input of the add-task flow.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub note: Option<String>,
}

impl NewTask {
    /// Build the record to persist. The id is the creation time in whole
    /// seconds, so two tasks created within the same second share an id.
    pub fn into_task(self, now: DateTime<Utc>) -> Task {
        Task {
            id: Some(now.timestamp()),
            title: Some(self.title),
            note: self.note,
            created_at: Some(now),
            completed: Some(false),
        }
    }
}

/// Input of the edit flow. Replaces title and note and restamps the date.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub note: Option<String>,
}

impl TaskEdit {
    pub fn apply(self, task: &Task, now: DateTime<Utc>) -> Task {
        Task {
            id: task.id,
            title: self.title.or_else(|| task.title.clone()),
            note: self.note.or_else(|| task.note.clone()),
            created_at: Some(now),
            completed: task.completed,
        }
    }
}
