//! Deterministic column display colors.

use std::collections::HashMap;

use shared::{domain::ColumnId, protocol::Column};

/// Fallback when a column id has no palette entry.
pub const DEFAULT_COLUMN_COLOR: &str = "#87A8EC";

/// Theme accents, cycled over columns in input order.
const COLUMN_PALETTE: [&str; 8] = [
    "#6a93e8", "#ffa000", "#28ceaa", "#673ab7", "#f7be5e", "#ff5fa2", "#87A8EC", "#a86b04",
];

/// Column -> display color mapping.
///
/// A function of the column id list and its order alone: the same ids in
/// the same input order always produce the same mapping, independent of
/// how anything else was fetched.
pub fn assign_colors(columns: &[Column]) -> HashMap<ColumnId, &'static str> {
    columns
        .iter()
        .enumerate()
        .map(|(position, column)| (column.id, COLUMN_PALETTE[position % COLUMN_PALETTE.len()]))
        .collect()
}

/// Color for one column, falling back to [`DEFAULT_COLUMN_COLOR`] for ids
/// outside the mapping. Never an error.
pub fn color_for(colors: &HashMap<ColumnId, &'static str>, column_id: ColumnId) -> &'static str {
    colors
        .get(&column_id)
        .copied()
        .unwrap_or(DEFAULT_COLUMN_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn column(id: ColumnId) -> Column {
        Column {
            id,
            title: String::new(),
            order: 0,
            tasks: Vec::new(),
        }
    }

    #[test]
    fn same_input_yields_equal_mappings() {
        let columns: Vec<Column> = (0..4).map(|_| column(ColumnId(Uuid::new_v4()))).collect();
        assert_eq!(assign_colors(&columns), assign_colors(&columns));
    }

    #[test]
    fn unknown_id_falls_back_to_default() {
        let colors = assign_colors(&[]);
        assert_eq!(
            color_for(&colors, ColumnId(Uuid::new_v4())),
            DEFAULT_COLUMN_COLOR
        );
    }

    #[test]
    fn neighboring_columns_get_distinct_colors() {
        let columns: Vec<Column> = (0..3).map(|_| column(ColumnId(Uuid::new_v4()))).collect();
        let colors = assign_colors(&columns);
        assert_ne!(
            color_for(&colors, columns[0].id),
            color_for(&colors, columns[1].id)
        );
        assert_ne!(
            color_for(&colors, columns[1].id),
            color_for(&colors, columns[2].id)
        );
    }
}
