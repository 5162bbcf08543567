use crate::cli::commands::{build_view, load_report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::export_payroll;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        week,
        force,
    } = cmd
    {
        let view = build_view(week, None)?;
        let (_store, report) = load_report(cfg, &view)?;

        match export_payroll(
            *format,
            &report.payroll,
            &report.window.start_str(),
            &report.window.end_str(),
            file,
            *force,
        ) {
            Err(AppError::NothingToExport(start, end)) => {
                warning(format!(
                    "Nothing to export: no approved entries between {start} and {end}."
                ));
            }
            other => other?,
        }
    }
    Ok(())
}
