use crate::models::{Task, TaskStats};

pub fn build_stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();

    TaskStats {
        total,
        completed,
        pending: total - completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, completed: bool) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: None,
            completed,
            created_at: None,
        }
    }

    #[test]
    fn stats_split_completed_and_pending() {
        let tasks = vec![task(1, true), task(2, false), task(3, false)];
        let stats = build_stats(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 2);
    }

    #[test]
    fn stats_empty_list_is_zero() {
        assert_eq!(build_stats(&[]), TaskStats::default());
    }
}
