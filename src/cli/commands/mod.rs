pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod payroll;
pub mod review;
pub mod summary;

use crate::cli::parser::{FilterArgs, WeekArgs};
use crate::config::Config;
use crate::core::filter::FilterCriteria;
use crate::core::logic::{Core, WeekReport};
use crate::core::view_state::ViewState;
use crate::data::DatasetStore;
use crate::errors::AppResult;
use crate::utils::date;
use std::path::Path;

/// View state for the week and filters given on the command line.
pub(crate) fn build_view(week: &WeekArgs, filters: Option<&FilterArgs>) -> AppResult<ViewState> {
    let anchor = date::date_or_today(week.week.as_deref())?;
    let mut view = ViewState::for_week(anchor);
    view.shift_weeks(week.offset)?;

    if let Some(f) = filters {
        let criteria = FilterCriteria::from_args(
            f.search.as_deref(),
            f.employee.as_deref(),
            f.status.as_deref(),
            f.day.as_deref(),
        )?;
        view = view.with_criteria(criteria);
    }

    Ok(view)
}

pub(crate) fn open_store(cfg: &Config) -> AppResult<DatasetStore> {
    DatasetStore::open(Path::new(&cfg.dataset))
}

pub(crate) fn load_report(cfg: &Config, view: &ViewState) -> AppResult<(DatasetStore, WeekReport)> {
    let store = open_store(cfg)?;
    let report = Core::report_from_source(&store, view, cfg.into())?;
    Ok((store, report))
}
