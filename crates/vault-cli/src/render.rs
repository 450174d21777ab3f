//! Terminal tables for previews, entry listings and selectors.

use chrono::{DateTime, Local, Utc};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vault_model::{ProcessingType, TextEntry, TextStats};
use vault_transform::label;

/// Display format for entry timestamps, e.g. `Mar 29, 2024 10:15 AM`.
pub const DATE_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.with_timezone(&Local).format(DATE_FORMAT).to_string()
}

pub fn stats_table(stats: &TextStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Words"),
        header_cell("Characters"),
        header_cell("Characters (no spaces)"),
        header_cell("Lines"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(stats.word_count),
        Cell::new(stats.char_count),
        Cell::new(stats.char_count_no_spaces),
        Cell::new(stats.line_count),
    ]);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

pub fn entries_table(entries: &[TextEntry], title_length: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Title"),
        header_cell("Processing"),
        header_cell("Created"),
        header_cell("Updated"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        let updated = if entry.was_edited() {
            Cell::new(format_timestamp(entry.updated_at()))
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(entry.id().short())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(entry.title(title_length)),
            processing_cell(entry.processing_type()),
            Cell::new(format_timestamp(entry.created_at())),
            updated,
        ]);
    }
    table
}

pub fn types_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Type"), header_cell("Label")]);
    apply_table_style(&mut table);
    for selector in ProcessingType::known() {
        table.add_row(vec![
            Cell::new(selector.as_str()).fg(Color::Blue),
            Cell::new(label(&selector)),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn processing_cell(selector: &ProcessingType) -> Cell {
    if selector.is_known() {
        Cell::new(label(selector))
    } else {
        Cell::new(format!("{} ({})", label(selector), selector)).fg(Color::Yellow)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
