//! Sibling ordering: display order and next-append position.
//!
//! Pure functions over whatever the store handed back. Order values may be
//! duplicated or non-contiguous after concurrent edits on the server; only
//! relative order matters, and nothing here renumbers existing siblings.

use shared::protocol::{Column, Task};

/// A sibling with an integer position among items of the same parent.
pub trait Ordered {
    fn order(&self) -> i64;
}

impl Ordered for Column {
    fn order(&self) -> i64 {
        self.order
    }
}

impl Ordered for Task {
    fn order(&self) -> i64 {
        self.order
    }
}

/// Total display order: ascending by `order`, ties keep input sequence.
///
/// The underlying sort is stable, so equal order values are never
/// arbitrarily shuffled and re-running on an unchanged input yields an
/// identical sequence.
pub fn display_order<T: Ordered + Clone>(siblings: &[T]) -> Vec<T> {
    let mut sorted = siblings.to_vec();
    sorted.sort_by_key(|sibling| sibling.order());
    sorted
}

/// Position for a sibling appended to `siblings`: one past the current
/// maximum, `0` for an empty set. Sent to the store at creation time, never
/// inferred after the fact.
pub fn next_order<T: Ordered>(siblings: &[T]) -> i64 {
    siblings
        .iter()
        .map(Ordered::order)
        .max()
        .map_or(0, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::ColumnId;
    use uuid::Uuid;

    fn column(title: &str, order: i64) -> Column {
        Column {
            id: ColumnId(Uuid::new_v4()),
            title: title.to_string(),
            order,
            tasks: Vec::new(),
        }
    }

    #[test]
    fn sorts_ascending_by_order() {
        let columns = vec![column("c", 2), column("a", 0), column("b", 1)];
        let ordered = display_order(&columns);
        let titles: Vec<&str> = ordered.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicate_orders_keep_input_sequence() {
        let columns = vec![
            column("first", 1),
            column("second", 1),
            column("third", 0),
            column("fourth", 1),
        ];
        let ordered = display_order(&columns);
        let titles: Vec<&str> = ordered.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "first", "second", "fourth"]);
    }

    #[test]
    fn display_order_is_idempotent() {
        let columns = vec![column("x", 3), column("y", 3), column("z", 1)];
        let once = display_order(&columns);
        let twice = display_order(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn next_order_appends_after_maximum() {
        let columns = vec![column("a", 0), column("b", 1), column("c", 2)];
        assert_eq!(next_order(&columns), 3);
    }

    #[test]
    fn next_order_on_empty_is_zero() {
        assert_eq!(next_order::<Column>(&[]), 0);
    }

    #[test]
    fn next_order_ignores_gaps() {
        let columns = vec![column("a", 0), column("b", 7)];
        assert_eq!(next_order(&columns), 8);
    }
}
