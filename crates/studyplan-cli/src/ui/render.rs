//! Rendering of schedules for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use studyplan_core::{Day, Schedule};

use super::mode::OutputMode;

/// Format an hours value the way schedules store it.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Render one day as a boxed table.
fn day_table(day: &Day) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Subject", "Hours"]);

    for allocation in &day.subjects {
        table.add_row(vec![
            Cell::new(&allocation.subject),
            Cell::new(format_hours(allocation.hours)),
        ]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    format!("Day {}\n{}", day.day_number, table)
}

/// Render a schedule in the given text mode.
///
/// Table mode prints a table per day. Plain mode prints
/// `Day N: <subject> <hours>` per allocation and `Day N: -` for empty days.
pub fn schedule(mode: OutputMode, schedule: &Schedule) -> anyhow::Result<String> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(schedule)?),
        OutputMode::Table => {
            let blocks: Vec<String> = schedule.days().iter().map(day_table).collect();
            Ok(blocks.join("\n\n"))
        }
        OutputMode::Plain => {
            let mut lines = Vec::new();
            for day in schedule.days() {
                if day.subjects.is_empty() {
                    lines.push(format!("Day {}: -", day.day_number));
                }
                for allocation in &day.subjects {
                    lines.push(format!(
                        "Day {}: {} {}",
                        day.day_number,
                        allocation.subject,
                        format_hours(allocation.hours)
                    ));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

/// One-line summary shown after a schedule is produced.
pub fn summary(schedule: &Schedule) -> String {
    format!(
        "{} day(s), {} subject(s), {} hours total",
        schedule.len(),
        schedule.subjects().len(),
        format_hours(schedule.total_hours())
    )
}

/// Render `key=value` receipt lines after an action.
pub fn receipt(items: &[(&str, &str)]) -> String {
    let mut lines = vec!["status=ok".to_string()];
    for (key, value) in items {
        lines.push(format!("{}={}", key, value));
    }
    lines.join("\n")
}
