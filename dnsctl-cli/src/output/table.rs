//! Plain-text table rendering

use crossterm::style::{Color, Stylize};
use dnsctl_core::{Alignment, Table};
use unicode_width::UnicodeWidthStr;

/// Render `table` as a bordered text grid.
///
/// Headers follow their column's alignment. `row_color` picks an optional color per
/// data row; headers and borders stay plain.
pub fn render(table: &Table, row_color: impl Fn(usize) -> Option<Color>) -> String {
    let widths = column_widths(table);
    let border = border_line(&widths);

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&row_line(&table.headers, &widths, &table.align, None));
    out.push_str(&border);
    for (index, row) in table.rows.iter().enumerate() {
        out.push_str(&row_line(row, &widths, &table.align, row_color(index)));
    }
    if !table.rows.is_empty() {
        out.push_str(&border);
    }
    out
}

fn column_widths(table: &Table) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line(cells: &[String], widths: &[usize], align: &[Alignment], color: Option<Color>) -> String {
    let mut line = String::from("|");
    for (col, width) in widths.iter().enumerate() {
        let cell = cells.get(col).map_or("", String::as_str);
        let padded = pad(cell, *width, align.get(col).copied().unwrap_or_default());
        line.push(' ');
        match color {
            Some(color) => line.push_str(&padded.with(color).to_string()),
            None => line.push_str(&padded),
        }
        line.push_str(" |");
    }
    line.push('\n');
    line
}

fn pad(cell: &str, width: usize, align: Alignment) -> String {
    let gap = width.saturating_sub(cell.width());
    let (left, right) = match align {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
        Alignment::Center => (gap / 2, gap - gap / 2),
    };
    format!("{}{cell}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> Table {
        let mut table = Table::new(&["id", "zone", "serial"])
            .with_align("serial", Alignment::Center);
        table.add_row(vec!["12".into(), "example.com".into(), "2024010101".into()]);
        table.add_row(vec!["7".into(), "a.io".into(), "1".into()]);
        table
    }

    #[test]
    fn renders_bordered_grid() {
        let text = render(&zones(), |_| None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "+----+-------------+------------+");
        assert_eq!(lines[1], "| id | zone        |   serial   |");
        assert_eq!(lines[3], "| 12 | example.com | 2024010101 |");
        assert_eq!(lines[4], "| 7  | a.io        |     1      |");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn headers_follow_column_alignment() {
        let mut table = Table::new(&["record", "ttl"]).with_align("record", Alignment::Right);
        table.add_row(vec!["mail.example".into(), "86400".into()]);

        let text = render(&table, |_| None);
        assert_eq!(text.lines().nth(1), Some("|       record | ttl   |"));
        assert_eq!(text.lines().nth(3), Some("| mail.example | 86400 |"));
    }

    #[test]
    fn right_alignment_pads_left() {
        assert_eq!(pad("www", 6, Alignment::Right), "   www");
        assert_eq!(pad("www", 6, Alignment::Left), "www   ");
        assert_eq!(pad("toolong", 3, Alignment::Center), "toolong");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(pad("例子", 6, Alignment::Left), "例子  ");
    }

    #[test]
    fn empty_table_has_header_only() {
        let text = render(&Table::new(&["record"]), |_| None);
        assert_eq!(text, "+--------+\n| record |\n+--------+\n");
    }

    #[test]
    fn colored_rows_keep_their_text() {
        let text = render(&zones(), |i| (i == 0).then_some(Color::Green));
        assert!(text.contains("example.com"));
        assert!(text.contains('\u{1b}'));
    }
}
