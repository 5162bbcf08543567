use crate::cli::commands::{build_view, load_report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::WeekReport;
use crate::errors::AppResult;
use crate::models::TimeEntryStatus;
use crate::ui::messages::header;
use crate::utils::colors::paint_bar;
use crate::utils::formatting::{bar, format_hours, format_money, pad_left};
use crate::utils::table::{Column, Table};

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { week, filters } = cmd {
        let view = build_view(week, Some(filters))?;
        let (_store, report) = load_report(cfg, &view)?;

        header(format!("Week {}", report.window.label()));
        print_totals(&report, &cfg.currency_symbol);
        print_daily(&report);
        print_employees(&report, cfg);
    }
    Ok(())
}

fn print_totals(report: &WeekReport, currency: &str) {
    let s = &report.summary;
    println!("Total hours     : {}", format_hours(s.total_hours));
    println!("Approved hours  : {}", format_hours(s.approved_hours));
    println!("Pending entries : {}", s.pending_count);
    println!("Labour cost     : {}", format_money(currency, s.total_labour_cost));
    println!("Approved cost   : {}", format_money(currency, s.approved_labour_cost));
    println!();
}

fn print_daily(report: &WeekReport) {
    println!("Daily hours (scale {}):", format_hours(report.max_daily_hours));

    for day in &report.daily {
        let approved = bar(day.approved_hours, report.max_daily_hours, BAR_WIDTH);
        let pending = bar(day.pending_hours, report.max_daily_hours, BAR_WIDTH);
        let rejected = bar(day.rejected_hours, report.max_daily_hours, BAR_WIDTH);

        println!(
            "  {} {}  {}{}{} ({} entries)",
            day.date.format("%a %d"),
            pad_left(&format!("{:.2}", day.total_hours), 6),
            paint_bar(&approved, TimeEntryStatus::Approved),
            paint_bar(&pending, TimeEntryStatus::Pending),
            paint_bar(&rejected, TimeEntryStatus::Rejected),
            day.entry_count
        );
    }
    println!();
}

fn print_employees(report: &WeekReport, cfg: &Config) {
    if report.employees.is_empty() {
        return;
    }

    let mut table = Table::new(vec![
        Column::left("Employee"),
        Column::right("Entries"),
        Column::right("Hours"),
        Column::right("Cost"),
    ])
    .with_separator(&cfg.separator_char);

    for e in &report.employees {
        table.add_row(vec![
            e.employee_name.clone(),
            e.entry_count.to_string(),
            format!("{:.2}", e.total_hours),
            format_money(&cfg.currency_symbol, e.cost),
        ]);
    }

    println!("By employee:");
    print!("{}", table.render());
}
