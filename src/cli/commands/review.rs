use crate::cli::commands::{build_view, load_report, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::{ReviewAction, TimesheetMutations};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// `approve` and `reject`: explicit ids.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (ids, action) = match cmd {
        Commands::Approve { ids } => (ids, ReviewAction::Approve),
        Commands::Reject { ids } => (ids, ReviewAction::Reject),
        _ => return Ok(()),
    };

    let mut store = open_store(cfg)?;
    let count = apply(&mut store, ids, action)?;
    success(format!("{count} time entries {}", action.past_tense()));
    Ok(())
}

/// `review`: every pending entry matching the week and filters.
pub fn handle_filtered(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Review {
        week,
        filters,
        approve,
        ..
    } = cmd
    {
        let action = if *approve {
            ReviewAction::Approve
        } else {
            ReviewAction::Reject
        };

        let mut view = build_view(week, Some(filters))?;
        let (mut store, report) = load_report(cfg, &view)?;

        view.select_all_pending(&report.visible);
        if view.selected.is_empty() {
            info("No pending entries match the filters.");
            return Ok(());
        }

        let selected = view.selected_ids();
        let outcome = apply(&mut store, &selected, action);

        if view.settle_batch(&outcome) {
            success(format!(
                "{} time entries {} for week {}",
                selected.len(),
                action.past_tense(),
                report.window.label()
            ));
        }
        outcome.map(|_| ())
    } else {
        Ok(())
    }
}

fn apply<M: TimesheetMutations>(store: &mut M, ids: &[String], action: ReviewAction) -> AppResult<usize> {
    match action {
        ReviewAction::Approve => store.batch_approve(ids),
        ReviewAction::Reject => store.batch_reject(ids),
    }
}
