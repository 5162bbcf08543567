use crate::cli::commands::{build_view, load_report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::PayrollEntry;
use crate::ui::messages::{header, warning};
use crate::utils::formatting::{format_hours, format_money};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Payroll { week } = cmd {
        let view = build_view(week, None)?;
        let (_store, report) = load_report(cfg, &view)?;

        header(format!("Payroll {}", report.window.label()));

        if report.payroll.is_empty() {
            warning("No approved entries in this week: nothing to pay.");
            return Ok(());
        }

        print!("{}", render_payroll(&report.payroll, cfg));
    }
    Ok(())
}

fn render_payroll(entries: &[PayrollEntry], cfg: &Config) -> String {
    let money = |v: f64| format_money(&cfg.currency_symbol, v);

    let mut table = Table::new(vec![
        Column::left("Employee"),
        Column::left("Job"),
        Column::right("Hours"),
        Column::right("Rate"),
        Column::right("Pay"),
    ])
    .with_separator(&cfg.separator_char);

    for p in entries {
        table.add_row(vec![
            p.employee_name.clone(),
            String::new(),
            format!("{:.2}", p.regular_hours),
            money(p.hourly_rate),
            money(p.gross_pay),
        ]);
        for job in &p.job_breakdown {
            table.add_row(vec![
                String::new(),
                job.job_title.clone(),
                format!("{:.2}", job.hours),
                String::new(),
                money(job.cost),
            ]);
        }
    }

    let hours: f64 = entries.iter().map(PayrollEntry::total_hours).sum();
    let gross: f64 = entries.iter().map(|p| p.gross_pay).sum();

    format!(
        "{}\n{} employees, {}, gross {}\n",
        table.render(),
        entries.len(),
        format_hours(hours),
        money(gross)
    )
}
