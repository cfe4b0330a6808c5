//! Pipe-table detection for report text.
//!
//! The heuristic accepts any line bounded by `|` with at least three fields, so
//! body text shaped like `| a | b | c |` followed by a dash line is read as a
//! table. That is a known limitation of the format, not something guarded here.

use crate::model::ast::TableBlock;

const DELIMITER: char = '|';

/// A line shaped like a table row: bounded by `|` with at least two interior `|`.
pub fn is_table_row(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 2
        && line.starts_with(DELIMITER)
        && line.ends_with(DELIMITER)
        && line.matches(DELIMITER).count() >= 4
}

/// A Markdown header separator such as `|---|:---:|---|`.
pub fn is_separator_line(line: &str) -> bool {
    let mut rest = line
        .trim()
        .chars()
        .filter(|c| *c != DELIMITER && !c.is_whitespace())
        .peekable();
    rest.peek().is_some() && rest.all(|c| c == '-' || c == ':')
}

/// Splits a table row into trimmed cells, ignoring the outer delimiters.
pub fn split_cells(line: &str) -> Vec<String> {
    let line = line.trim();
    let inner = line.strip_prefix(DELIMITER).unwrap_or(line);
    let inner = inner.strip_suffix(DELIMITER).unwrap_or(inner);
    inner
        .split(DELIMITER)
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Tries to read a table starting at `lines[start]`.
///
/// Returns the table and the number of lines consumed (header, separator and
/// data rows), or `None` if no table starts here.
pub(crate) fn read_table(lines: &[&str], start: usize) -> Option<(TableBlock, usize)> {
    let header = lines.get(start)?;
    let separator = lines.get(start + 1)?;
    if !is_table_row(header) || !is_separator_line(separator) {
        return None;
    }

    let headers = split_cells(header);
    let rows: Vec<Vec<String>> = lines[start + 2..]
        .iter()
        .take_while(|line| is_table_row(line))
        .map(|line| split_cells(line))
        .collect();

    let consumed = 2 + rows.len();
    Some((TableBlock::new(headers, rows), consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_table_row() {
        assert!(is_table_row("| a | b | c |"));
        assert!(is_table_row("|a|b|c|   "));
        assert!(is_table_row("||||"));
        assert!(!is_table_row("| a | b |"));
        assert!(!is_table_row("a | b | c |"));
        assert!(!is_table_row("|"));
        assert!(!is_table_row(""));
    }

    #[test]
    fn test_is_separator_line() {
        assert!(is_separator_line("|---|---|---|"));
        assert!(is_separator_line("| :--- | :---: | ---: |"));
        assert!(is_separator_line("---"));
        assert!(!is_separator_line("| | | |"));
        assert!(!is_separator_line("|---|x|---|"));
        assert!(!is_separator_line(""));
    }

    #[test]
    fn test_split_cells_trims() {
        assert_eq!(
            split_cells("|  نیاز شغلی | شواهد |تطابق|"),
            vec!["نیاز شغلی", "شواهد", "تطابق"]
        );
        assert_eq!(split_cells("| a || c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_read_table_consumes_rows() {
        let lines = [
            "| h1 | h2 | h3 |",
            "|---|---|---|",
            "| a | b | c |",
            "| d | e |",
            "after",
        ];
        let (table, consumed) = read_table(&lines, 0).expect("table");
        assert_eq!(consumed, 3);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.headers(), ["h1", "h2", "h3"]);
    }

    #[test]
    fn test_read_table_requires_separator() {
        let lines = ["| h1 | h2 | h3 |", "| a | b | c |"];
        assert!(read_table(&lines, 0).is_none());
        assert!(read_table(&lines, 1).is_none());
    }
}
