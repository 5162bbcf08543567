use crate::cli::commands::{build_view, load_report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::WeekReport;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, paint_status};
use crate::utils::formatting::wrap_note;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        week,
        filters,
        notes,
    } = cmd
    {
        let view = build_view(week, Some(filters))?;
        let (_store, report) = load_report(cfg, &view)?;

        header(format!("Week {}", report.window.label()));

        if report.visible.is_empty() {
            if report.week_entries.is_empty() {
                info("No time entries for this week.");
            } else {
                info(format!(
                    "No entries match the filters ({} in the week).",
                    report.week_entries.len()
                ));
            }
            return Ok(());
        }

        print!("{}", render_entries(&report, *notes, &cfg.separator_char));
        println!(
            "\n{} of {} entries shown",
            report.visible.len(),
            report.week_entries.len()
        );
    }
    Ok(())
}

fn render_entries(report: &WeekReport, notes: bool, separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("Date"),
        Column::left("Day"),
        Column::left("Employee"),
        Column::left("Job"),
        Column::left("In"),
        Column::left("Out"),
        Column::right("Break"),
        Column::right("Hours"),
        Column::left("Status"),
    ])
    .with_separator(separator);

    for e in &report.visible {
        table.add_row(vec![
            e.id.clone(),
            e.date_label(),
            e.weekday_label(),
            e.employee_name.clone(),
            e.job_title.clone(),
            colorize_optional(&e.clock_in),
            colorize_optional(&e.clock_out),
            format!("{}m", e.break_minutes),
            format!("{:.2}", e.total_hours),
            paint_status(e.status),
        ]);
    }

    let mut out = table.render();

    if notes {
        let with_notes: Vec<_> = report
            .visible
            .iter()
            .filter_map(|e| e.notes.as_deref().map(|n| (e.id.as_str(), n)))
            .filter(|(_, n)| !n.trim().is_empty())
            .collect();

        if !with_notes.is_empty() {
            out.push_str("\nNotes:\n");
            for (id, note) in with_notes {
                out.push_str(&format!("  {id}:\n{}\n", wrap_note(note, 72, "    ")));
            }
        }
    }

    out
}
