// Visible-subset selection for taskpad
// Pure: same inputs always produce the same output, nothing is mutated

use crate::models::{Filter, Task};

/// Select the tasks to display: a case-insensitive substring search ANDed
/// with the completion filter. An empty query matches everything. The order
/// of `tasks` is preserved.
pub fn visibleTasks<'a>(tasks: &'a [Task], filter: Filter, query: &str) -> Vec<&'a Task> {
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| needle.is_empty() || t.text.to_lowercase().contains(&needle))
        .filter(|t| filter.matches(t.completed))
        .collect()
}
