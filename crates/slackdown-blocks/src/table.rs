//! Table capping and shaping.

use crate::block::{Block, MAX_TABLE_COLS, MAX_TABLE_ROWS};

/// Shape tokenized pipe-table rows into a table block, enforcing the
/// platform's row and column caps.
///
/// Every row, header included, keeps only its first [`MAX_TABLE_COLS`]
/// cells; at most [`MAX_TABLE_ROWS`] data rows are retained. Capping always
/// drops from the end — rightmost columns, bottommost rows — and never
/// reorders. The divider row of the source table is structural and must not
/// be passed here; the compiler consumes it during classification.
#[must_use]
pub fn render_table(header_cells: Vec<String>, body_rows: Vec<Vec<String>>) -> Block {
    if body_rows.len() > MAX_TABLE_ROWS {
        tracing::debug!(
            dropped = body_rows.len() - MAX_TABLE_ROWS,
            "Table exceeds row cap, dropping trailing rows"
        );
    }

    let header = cap_columns(header_cells);
    let rows: Vec<Vec<String>> = body_rows
        .into_iter()
        .take(MAX_TABLE_ROWS)
        .map(cap_columns)
        .collect();

    Block::Table { header, rows }
}

fn cap_columns(mut cells: Vec<String>) -> Vec<String> {
    if cells.len() > MAX_TABLE_COLS {
        tracing::debug!(
            dropped = cells.len() - MAX_TABLE_COLS,
            "Table row exceeds column cap, dropping trailing cells"
        );
        cells.truncate(MAX_TABLE_COLS);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|&v| v.to_owned()).collect()
    }

    #[test]
    fn test_small_table_passes_through() {
        let block = render_table(
            cells(&["name", "state"]),
            vec![cells(&["api", "up"]), cells(&["db", "down"])],
        );
        let Block::Table { header, rows } = block else {
            panic!("expected a table block");
        };
        assert_eq!(header, cells(&["name", "state"]));
        assert_eq!(rows, vec![cells(&["api", "up"]), cells(&["db", "down"])]);
    }

    #[test]
    fn test_column_cap_applies_to_header_and_rows() {
        let wide: Vec<String> = (0..25).map(|i| format!("c{i}")).collect();
        let Block::Table { header, rows } = render_table(wide.clone(), vec![wide]) else {
            panic!("expected a table block");
        };
        assert_eq!(header.len(), MAX_TABLE_COLS);
        assert_eq!(rows[0].len(), MAX_TABLE_COLS);
        // Leftmost cells survive, rightmost are dropped.
        assert_eq!(header[0], "c0");
        assert_eq!(header[MAX_TABLE_COLS - 1], "c19");
    }

    #[test]
    fn test_row_cap_drops_from_the_bottom() {
        let body: Vec<Vec<String>> = (0..120).map(|i| cells(&[&format!("row{i}")])).collect();
        let Block::Table { rows, .. } = render_table(cells(&["h"]), body) else {
            panic!("expected a table block");
        };
        assert_eq!(rows.len(), MAX_TABLE_ROWS);
        assert_eq!(rows[0][0], "row0");
        assert_eq!(rows[MAX_TABLE_ROWS - 1][0], "row99");
    }

    #[test]
    fn test_header_shape_independent_of_row_cap() {
        let body: Vec<Vec<String>> = (0..150).map(|_| cells(&["x"])).collect();
        let Block::Table { header, rows } = render_table(cells(&["a", "b", "c"]), body) else {
            panic!("expected a table block");
        };
        assert_eq!(header.len(), 3);
        assert_eq!(rows.len(), MAX_TABLE_ROWS);
    }

    #[test]
    fn test_empty_body_is_allowed() {
        let Block::Table { header, rows } = render_table(cells(&["only", "header"]), Vec::new())
        else {
            panic!("expected a table block");
        };
        assert_eq!(header.len(), 2);
        assert!(rows.is_empty());
    }
}
