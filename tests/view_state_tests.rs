mod common;
use common::{date, scenario_display};
use rtimesheet::core::filter::FilterCriteria;
use rtimesheet::core::view_state::ViewState;
use rtimesheet::errors::{AppError, AppResult};

#[test]
fn test_navigation() {
    let mut view = ViewState::for_week(date("2026-01-08"));
    assert_eq!(view.window.start, date("2026-01-05"));

    view.next_week();
    assert_eq!(view.window.start, date("2026-01-12"));
    assert_eq!(view.window.end, date("2026-01-18"));

    view.previous_week();
    view.previous_week();
    assert_eq!(view.window.start, date("2025-12-29"));

    view.jump_to_current(date("2026-03-04"));
    assert_eq!(view.window.start, date("2026-03-02"));
}

#[test]
fn test_shift_out_of_range_keeps_view() {
    let mut view = ViewState::for_week(date("2026-01-08"));
    view.toggle("e3");

    let err = view.shift_weeks(1_000_000_000_000).unwrap_err();
    assert!(matches!(err, AppError::DateOutOfRange(_)));
    assert_eq!(view.window.start, date("2026-01-05"));
    assert_eq!(view.selected.len(), 1);

    view.shift_weeks(-1).expect("previous week");
    assert_eq!(view.window.start, date("2025-12-29"));
}

#[test]
fn test_day_filter_dropped_when_leaving_its_week() {
    let criteria = FilterCriteria {
        day: Some(date("2026-01-06")),
        ..FilterCriteria::default()
    };
    let mut view = ViewState::for_week(date("2026-01-05")).with_criteria(criteria);
    assert_eq!(view.criteria.day, Some(date("2026-01-06")));

    view.next_week();
    assert_eq!(view.criteria.day, None);
}

#[test]
fn test_toggle_and_select_all_pending() {
    let mut view = ViewState::for_week(date("2026-01-05"));

    assert!(view.toggle("e1"));
    assert!(!view.toggle("e1"));
    assert!(view.selected.is_empty());

    view.select_all_pending(&scenario_display());
    assert_eq!(view.selected_ids(), vec!["e3".to_string()]);
}

#[test]
fn test_successful_batch_clears_selection() {
    let mut view = ViewState::for_week(date("2026-01-05"));
    view.toggle("e3");

    let outcome: AppResult<usize> = Ok(1);
    assert!(view.settle_batch(&outcome));
    assert!(view.selected.is_empty());
}

#[test]
fn test_failed_batch_keeps_selection() {
    let mut view = ViewState::for_week(date("2026-01-05"));
    view.toggle("e3");
    view.toggle("e9");

    let outcome: AppResult<usize> = Err(AppError::EntryNotFound("e9".to_string()));
    assert!(!view.settle_batch(&outcome));
    assert_eq!(view.selected.len(), 2);
}

#[test]
fn test_view_state_serializes() {
    let mut view = ViewState::for_week(date("2026-01-05"));
    view.toggle("e1");

    let json = serde_json::to_string(&view).expect("serialize view");
    let back: ViewState = serde_json::from_str(&json).expect("deserialize view");
    assert_eq!(back, view);
}
