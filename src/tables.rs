use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    quantity::cost::Cost,
    summary::{Report, record::Summary},
};

#[must_use]
pub fn build_report_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec![
        "Month",
        "Usage",
        "Peak usage",
        "Off-peak",
        "Block plan",
        "EV plan",
        "Difference",
    ]);
    for (month, summary) in &report.months {
        table.add_row(build_summary_row(Cell::new(month), summary));
    }
    table.add_row(
        build_summary_row(Cell::new("Total"), &report.overall)
            .into_iter()
            .map(|cell| cell.add_attribute(Attribute::Bold)),
    );
    table
}

fn build_summary_row(title: Cell, summary: &Summary) -> Vec<Cell> {
    vec![
        title,
        Cell::new(summary.usage).set_alignment(CellAlignment::Right),
        Cell::new(summary.peak_usage).set_alignment(CellAlignment::Right),
        summary.off_peak_percent.map_or_else(
            || Cell::new("n/a").fg(Color::Red),
            |percent| Cell::new(format!("{percent:.1}%")),
        ),
        Cell::new(summary.block_cost).set_alignment(CellAlignment::Right),
        Cell::new(summary.ev_cost).set_alignment(CellAlignment::Right),
        // Positive difference: the time-of-use plan is cheaper.
        Cell::new(summary.difference).set_alignment(CellAlignment::Right).fg(
            if summary.difference > Cost::ZERO { Color::Green } else { Color::Red },
        ),
    ]
}
