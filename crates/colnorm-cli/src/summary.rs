//! Terminal rendering of confidence tables and frame previews.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use colnorm_model::{ConfidenceRecord, any_to_string};

/// Prints the per-mapping confidence table.
pub fn print_confidence_table(records: &[ConfidenceRecord]) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Mapped Column"),
        header_cell("Score"),
    ]);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for record in records {
        table.add_row(vec![
            Cell::new(&record.key),
            Cell::new(&record.value),
            score_cell(record.score),
        ]);
    }
    println!("{table}");
}

/// Prints the first `limit` rows of a frame.
pub fn print_frame_preview(df: &DataFrame, limit: usize) {
    let head = df.head(Some(limit));
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(
        head.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    for idx in 0..head.height() {
        let row: Vec<Cell> = head
            .get_columns()
            .iter()
            .map(|col| {
                Cell::new(any_to_string(col.get(idx).unwrap_or(AnyValue::Null)))
            })
            .collect();
        table.add_row(row);
    }
    println!("{table}");
    if df.height() > limit {
        println!("... {} more rows", df.height() - limit);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn score_cell(score: f64) -> Cell {
    let color = if score >= 0.8 {
        Color::Green
    } else if score >= 0.5 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format!("{score:.3}")).fg(color)
}
