use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::CheckResult;

pub fn print_summary(result: &CheckResult) {
    println!("Entity: {}", result.entity);
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    let summaries = result.report.field_summaries();
    if summaries.is_empty() {
        println!(
            "All {} configured field(s) passed.",
            result.checked_fields
        );
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("First message"),
    ]);
    for summary in &summaries {
        table.add_row(vec![
            Cell::new(&summary.field),
            count_cell(summary.errors, Color::Red),
            count_cell(summary.warnings, Color::Yellow),
            Cell::new(&summary.first_message),
        ]);
    }
    println!("{table}");
    println!(
        "{} error(s), {} warning(s) across {} configured field(s)",
        result.report.error_count(),
        result.report.warning_count(),
        result.checked_fields
    );
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if count > 0 { cell.fg(color) } else { cell }
}
