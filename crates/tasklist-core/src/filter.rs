use crate::task::Task;

/// Case-insensitive search over title and note.
///
/// A blank query keeps every task.
pub fn filter_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    let query = query.trim();
    if query.is_empty() {
        return tasks.to_vec();
    }
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| matches(task, &needle))
        .cloned()
        .collect()
}

fn matches(task: &Task, needle: &str) -> bool {
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
    };
    contains(&task.title) || contains(&task.note)
}
