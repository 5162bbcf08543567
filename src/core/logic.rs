use crate::config::Config;
use crate::core::aggregate::{daily_breakdown, employee_breakdown, max_daily_hours, summarize};
use crate::core::filter::apply_filters;
use crate::core::normalize::normalize_entries;
use crate::core::payroll::build_payroll;
use crate::core::rates::RateBook;
use crate::core::view_state::ViewState;
use crate::core::week::{WeekWindow, filter_week};
use crate::data::TimesheetSource;
use crate::errors::AppResult;
use crate::models::{
    DailyBreakdown, DisplayTimeEntry, Employee, EmployeeBreakdown, Job, PayrollEntry, TimeEntry,
    TimesheetSummary,
};

/// Tunables taken from the configuration file.
#[derive(Debug, Clone, Copy)]
pub struct ReportSettings {
    pub fallback_hourly_rate: f64,
    pub chart_floor_hours: f64,
}

impl From<&Config> for ReportSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            fallback_hourly_rate: cfg.fallback_hourly_rate,
            chart_floor_hours: cfg.chart_floor_hours,
        }
    }
}

/// Every derived value for one week.
#[derive(Debug, Clone)]
pub struct WeekReport {
    pub window: WeekWindow,
    pub week_entries: Vec<DisplayTimeEntry>,
    pub visible: Vec<DisplayTimeEntry>,
    pub summary: TimesheetSummary,
    pub daily: Vec<DailyBreakdown>,
    pub max_daily_hours: f64,
    pub employees: Vec<EmployeeBreakdown>,
    pub payroll: Vec<PayrollEntry>,
}

pub struct Core;

impl Core {
    /// Recompute the whole report from the three source collections.
    pub fn build_report(
        entries: &[TimeEntry],
        employees: &[Employee],
        jobs: &[Job],
        view: &ViewState,
        settings: ReportSettings,
    ) -> WeekReport {
        let rates = RateBook::new(employees, settings.fallback_hourly_rate);
        let normalized = normalize_entries(entries, employees, jobs);

        let week_entries = filter_week(&normalized, &view.window);
        let visible = apply_filters(&week_entries, &view.criteria);

        let summary = summarize(&visible, &rates);
        let daily = daily_breakdown(&view.window, &week_entries);
        let max_daily_hours = max_daily_hours(&daily, settings.chart_floor_hours);
        let employees = employee_breakdown(&week_entries, &rates);
        let payroll = build_payroll(&week_entries, &view.window, &rates);

        tracing::debug!(
            week = %view.window.start_str(),
            total = entries.len(),
            in_week = week_entries.len(),
            visible = visible.len(),
            "report built"
        );

        WeekReport {
            window: view.window,
            week_entries,
            visible,
            summary,
            daily,
            max_daily_hours,
            employees,
            payroll,
        }
    }

    /// Fetch from `source` and build the report.
    pub fn report_from_source<S: TimesheetSource + ?Sized>(
        source: &S,
        view: &ViewState,
        settings: ReportSettings,
    ) -> AppResult<WeekReport> {
        let employees = source.employees()?;
        let jobs = source.jobs()?;
        let entries = source.time_entries()?;

        Ok(Self::build_report(&entries, &employees, &jobs, view, settings))
    }
}
