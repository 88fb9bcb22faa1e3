use crate::ingest::Classification;
use crate::report::StatRow;
use crate::stats::AccumulatorRegistry;
use owo_colors::OwoColorize;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

const HEADERS: [&str; 11] = [
    "Kind",
    "Total",
    "Total Time",
    "Avg Time",
    "Variance",
    "P90",
    "P95",
    "P99",
    "Min",
    "Max",
    "RPS",
];

const WIDTHS: [usize; 11] = [15, 15, 20, 20, 20, 16, 16, 16, 16, 16, 10];

const SECTIONS: [(Classification, &str); 4] = [
    (Classification::All, "REQUEST STATISTICS: ALL"),
    (Classification::Static, "REQUEST STATISTICS: STATIC"),
    (Classification::Dynamic, "REQUEST STATISTICS: DYNAMIC"),
    (Classification::Generic, "REQUEST STATISTICS: METHODS"),
];

/// Renders one table per classification, rows in registry order.
///
/// `ALL` is always shown; other sections only when they have rows.
pub fn render_console(registry: &AccumulatorRegistry, color: bool) -> String {
    let mut out = String::new();

    for (classification, title) in SECTIONS {
        let rows: Vec<StatRow> = registry
            .by_classification(classification)
            .map(|(key, stats)| StatRow::new(key, stats))
            .collect();

        if rows.is_empty() && classification != Classification::All {
            continue;
        }

        push_header(&mut out, title, color);
        for row in &rows {
            push_row(&mut out, row);
        }
    }

    out
}

fn push_header(out: &mut String, title: &str, color: bool) {
    out.push('\n');
    if color {
        let _ = writeln!(out, "{}", title.bold().blue());
    } else {
        let _ = writeln!(out, "{title}");
    }

    let cells: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    push_cells(out, &cells);
    out.push_str(&"-".repeat(table_width()));
    out.push('\n');
}

fn push_row(out: &mut String, row: &StatRow) {
    let cells = vec![
        row.kind.clone(),
        row.total.to_string(),
        two_places(row.total_time),
        two_places(row.avg_time),
        two_places(row.variance),
        two_places(row.p90),
        two_places(row.p95),
        two_places(row.p99),
        two_places(row.min),
        two_places(row.max),
        row.rps.to_string(),
    ];
    push_cells(out, &cells);
}

fn push_cells(out: &mut String, cells: &[String]) {
    let line = cells
        .iter()
        .zip(WIDTHS)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Columns plus the single spaces between them.
fn table_width() -> usize {
    WIDTHS.iter().sum::<usize>() + WIDTHS.len() - 1
}

fn two_places(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
