use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use regionfix_common::normalize_for_match;
use regionfix_core::BatchSummary;
use regionfix_model::Confidence;
use regionfix_reference::ReferenceIndex;

/// One line of the batch summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfidenceRow {
    pub confidence: Confidence,
    pub count: usize,
    /// Share of the batch, one decimal, or `-` for an empty batch.
    pub share: String,
}

pub fn confidence_rows(summary: &BatchSummary) -> Vec<ConfidenceRow> {
    summary
        .by_confidence()
        .into_iter()
        .map(|(confidence, count)| ConfidenceRow {
            confidence,
            count,
            share: share(count, summary.total),
        })
        .collect()
}

fn share(count: usize, total: usize) -> String {
    if total == 0 {
        return "-".to_string();
    }
    let tenths = (count * 1000 + total / 2) / total;
    format!("{}.{}%", tenths / 10, tenths % 10)
}

pub fn summary_table(summary: &BatchSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Confidence"),
        header_cell("Records"),
        header_cell("Share"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in confidence_rows(summary) {
        table.add_row(vec![
            confidence_cell(row.confidence),
            count_cell(row.count, confidence_color(row.confidence)),
            dim_cell(row.share),
        ]);
    }
    table.add_row(vec![
        Cell::new("CORRECTED")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(summary.corrected, Color::Cyan),
        dim_cell(share(summary.corrected, summary.total)),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Every province with its number of districts, in dataset order.
pub fn province_table(index: &ReferenceIndex) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Province"), header_cell("Districts")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for province in index.provinces() {
        let districts = index.districts_of(&normalize_for_match(province)).len();
        table.add_row(vec![Cell::new(province), Cell::new(districts)]);
    }
    table
}

pub fn district_table(province: &str, districts: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Province"), header_cell("District")]);
    apply_table_style(&mut table);
    for district in districts {
        table.add_row(vec![dim_cell(province), Cell::new(district)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn confidence_color(confidence: Confidence) -> Color {
    match confidence {
        Confidence::Exact => Color::Green,
        Confidence::Fuzzy => Color::Yellow,
        Confidence::Resolved => Color::Blue,
        Confidence::Unknown => Color::Red,
    }
}

fn confidence_cell(confidence: Confidence) -> Cell {
    Cell::new(confidence.as_str()).fg(confidence_color(confidence))
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_rounds_to_one_decimal() {
        assert_eq!(share(1, 3), "33.3%");
        assert_eq!(share(2, 3), "66.7%");
        assert_eq!(share(3, 3), "100.0%");
        assert_eq!(share(0, 0), "-");
    }
}
