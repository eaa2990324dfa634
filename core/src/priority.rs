//! Priority assignment for newly created items.
//!
//! An explicit priority is always used verbatim, with no validation or
//! clamping. Otherwise the new item lands one step above the highest priority
//! among incomplete items, so it queues behind everything still open.
//! Completed items never influence the result.

use crate::item::TodoItem;

/// Priority given to a new item when nothing is left open.
pub const FIRST_PRIORITY: f64 = 1.0;

/// Distance between the highest open priority and the next assigned one.
pub const PRIORITY_STEP: f64 = 1.0;

/// Priority for the next item created without an explicit one.
///
/// Items missing a priority in the backing document were read as `0.0`, so
/// they count as zero here.
///
/// # Examples
///
/// ```
/// use todo_core::priority::next_priority;
///
/// assert_eq!(next_priority(&[]), 1.0);
/// ```
#[must_use]
pub fn next_priority(items: &[TodoItem]) -> f64 {
    items
        .iter()
        .filter(|item| !item.completed)
        .map(|item| item.priority)
        .reduce(f64::max)
        .map_or(FIRST_PRIORITY, |highest| highest + PRIORITY_STEP)
}

/// Resolve the priority of a new item against the current collection.
#[must_use]
pub fn resolve_priority(requested: Option<f64>, items: &[TodoItem]) -> f64 {
    requested.unwrap_or_else(|| next_priority(items))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn item(id: &str, completed: bool, priority: f64) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            title: format!("title {id}"),
            description: String::new(),
            completed,
            priority,
        }
    }

    #[test]
    fn empty_collection_starts_at_one() {
        assert_eq!(next_priority(&[]), FIRST_PRIORITY);
    }

    #[test]
    fn all_completed_starts_at_one() {
        let items = [item("a", true, 7.0), item("b", true, 3.0)];
        assert_eq!(next_priority(&items), 1.0);
    }

    #[test]
    fn goes_one_above_highest_open_item() {
        let items = [item("a", false, 2.0), item("b", false, 4.5), item("c", true, 100.0)];
        assert_eq!(next_priority(&items), 5.5);
    }

    #[test]
    fn negative_open_priorities_are_respected() {
        let items = [item("a", false, -5.0), item("b", false, -8.0)];
        assert_eq!(next_priority(&items), -4.0);
    }

    #[test]
    fn explicit_priority_wins_verbatim() {
        let items = [item("a", false, 3.0)];
        assert_eq!(resolve_priority(Some(-5.0), &items), -5.0);
        assert_eq!(resolve_priority(Some(1_000_000.0), &items), 1_000_000.0);
        assert_eq!(resolve_priority(None, &items), 4.0);
    }
}
