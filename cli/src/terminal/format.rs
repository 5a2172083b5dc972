//! Renders an order [`Table`] as boxed terminal rows.

use colored::*;
use kasir_common::order::Table;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, print};

const INDEX_HEADER: &str = "#";
const EMPTY_ORDER: &str = "(no items)";

/// Plain-text cells of a table, header first.
fn cells(table: &Table) -> Vec<[String; 5]> {
    let mut out = Vec::with_capacity(table.len() + 1);
    let [name, quantity, unit_price, line_total] = Table::COLUMNS;
    out.push([
        INDEX_HEADER.to_string(),
        name.to_string(),
        quantity.to_string(),
        unit_price.to_string(),
        line_total.to_string(),
    ]);

    for row in table.rows() {
        out.push([
            row.number.to_string(),
            row.item.name().to_string(),
            row.item.quantity().to_string(),
            row.item.unit_price().to_string(),
            row.item.line_total().to_string(),
        ]);
    }
    out
}

fn column_widths(cells: &[[String; 5]]) -> [usize; 5] {
    let mut widths = [0usize; 5];
    for row in cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }
    widths
}

fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell)));
    if right_align {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}

/// Lays the table out as uncoloured lines: header, rule, one line per row.
///
/// The name column is left-aligned, every numeric column right-aligned.
pub fn render(table: &Table) -> Vec<String> {
    if table.is_empty() {
        return vec![EMPTY_ORDER.to_string()];
    }

    let cells = cells(table);
    let widths = column_widths(&cells);

    let line = |row: &[String; 5]| -> String {
        row.iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, width))| pad(cell, *width, col != 1))
            .collect::<Vec<String>>()
            .join(" │ ")
    };

    let rule: String = widths
        .iter()
        .map(|width| "─".repeat(*width))
        .collect::<Vec<String>>()
        .join("─┼─");

    let mut lines = Vec::with_capacity(cells.len() + 1);
    lines.push(line(&cells[0]));
    lines.push(rule);
    lines.extend(cells[1..].iter().map(line));
    lines
}

pub fn print_table(table: &Table) {
    let lines = render(table);
    if table.is_empty() {
        print::print(&format!("{}", lines[0].italic().color(colors::SEPARATOR)));
        return;
    }

    for (idx, line) in lines.iter().enumerate() {
        let colored: ColoredString = match idx {
            0 => line.color(colors::PRIMARY).bold(),
            1 => line.color(colors::SEPARATOR),
            _ => line.color(colors::TEXT_DEFAULT),
        };
        print::print(&format!("{colored}"));
    }
}
