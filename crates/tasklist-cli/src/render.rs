use tasklist_core::task::Task;

/// One line per task: `[x] 12  Title - note (2025-01-19)`.
pub fn task_line(task: &Task) -> String {
    let mark = if task.is_completed() { 'x' } else { ' ' };
    let mut line = format!("[{mark}] {:<10}  {}", task.key(), task.title_or_default());
    if let Some(note) = task.note.as_deref().filter(|n| !n.is_empty()) {
        line.push_str(" - ");
        line.push_str(note);
    }
    if let Some(created) = task.created_at {
        line.push_str(&format!(" ({})", created.format("%Y-%m-%d")));
    }
    line
}

pub fn task_lines(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "no tasks".to_string();
    }
    tasks.iter().map(task_line).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn completed_task_with_note_and_date() {
        let task = Task {
            id: Some(2),
            title: Some("Task 2".into()),
            note: Some("Memorize a poem".into()),
            created_at: Some(Utc.with_ymd_and_hms(2025, 1, 19, 9, 0, 0).unwrap()),
            completed: Some(true),
        };
        assert_eq!(
            task_line(&task),
            "[x] 2           Task 2 - Memorize a poem (2025-01-19)"
        );
    }

    #[test]
    fn bare_task() {
        let task = Task {
            id: Some(5),
            ..Default::default()
        };
        assert_eq!(task_line(&task), "[ ] 5           ");
    }

    #[test]
    fn empty_list() {
        assert_eq!(task_lines(&[]), "no tasks");
    }
}
