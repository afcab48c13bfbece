use super::*;
use crate::fake::FakeScreen;
use crate::screen::ChangeStatus;

// -- set_resolution --

#[test]
fn matching_resolution_skips_mode_change() {
    let screen = FakeScreen::new(1920, 1080, 96);

    assert!(set_resolution(&screen, 1920, 1080).unwrap());
    assert_eq!(screen.mode_changes(), 0);
}

#[test]
fn repeated_resolution_change_only_applies_once() {
    let screen = FakeScreen::new(1024, 768, 96);

    assert!(set_resolution(&screen, 1920, 1080).unwrap());
    assert!(set_resolution(&screen, 1920, 1080).unwrap());

    assert_eq!(screen.mode_changes(), 1);
}

#[test]
fn resolution_change_overwrites_only_size() {
    let screen = FakeScreen::new(1024, 768, 96);

    set_resolution(&screen, 2560, 1440).unwrap();

    let applied = screen.applied_modes.borrow();
    assert_eq!(applied[0].width, 2560);
    assert_eq!(applied[0].height, 1440);
    assert_eq!(applied[0].frequency, 60);
    assert_eq!(screen.width.get(), 2560);
    assert_eq!(screen.height.get(), 1440);
}

#[test]
fn only_successful_status_counts_as_success() {
    for status in [
        ChangeStatus::Restart,
        ChangeStatus::Failed,
        ChangeStatus::BadMode,
        ChangeStatus::BadParam,
    ] {
        let mut screen = FakeScreen::new(1024, 768, 96);
        screen.mode_status = status;

        assert!(!set_resolution(&screen, 1920, 1080).unwrap(), "{status:?}");
        assert_eq!(screen.mode_changes(), 1, "no retry for {status:?}");
    }
}

#[test]
fn resolution_query_failure_is_an_error() {
    let mut screen = FakeScreen::new(1024, 768, 96);
    screen.fail_queries = true;

    assert!(set_resolution(&screen, 1920, 1080).is_err());
    assert_eq!(screen.mode_changes(), 0);
}

// -- set_dpi --

#[test]
fn matching_dpi_skips_scaling_calls() {
    let screen = FakeScreen::new(1920, 1080, 120);

    assert!(set_dpi(&screen, 125).unwrap());
    assert_eq!(screen.scaling_call_count(), 0);
}

#[test]
fn sweep_stops_when_target_is_reached() {
    let screen = FakeScreen::new(1920, 1080, 96);

    assert!(set_dpi(&screen, 150).unwrap());

    // -4 => 100%, -3 => 125%, -2 => 150%
    assert_eq!(*screen.scaling_calls.borrow(), vec![-4, -3, -2]);
    assert_eq!(query::primary_dpi(&screen, true).unwrap(), 150);
}

#[test]
fn sweep_walks_indices_in_ascending_order() {
    let screen = FakeScreen::new(1920, 1080, 96);

    set_dpi(&screen, 300).unwrap();

    assert_eq!(
        *screen.scaling_calls.borrow(),
        (-4..=4).collect::<Vec<i32>>()
    );
}

#[test]
fn sweep_is_bounded_to_nine_calls() {
    let screen = FakeScreen::new(1920, 1080, 96);

    // 137% is not on the ladder.
    set_dpi(&screen, 137).unwrap();

    assert_eq!(screen.scaling_call_count(), 9);
}

#[test]
fn unreached_target_returns_last_call_result() {
    let mut screen = FakeScreen::new(1920, 1080, 96);
    screen.ladder.clear();

    // Every call "succeeds" but the DPI never moves.
    assert!(set_dpi(&screen, 150).unwrap());
    assert_eq!(screen.scaling_call_count(), 9);
    assert_eq!(query::primary_dpi(&screen, true).unwrap(), 100);
}

#[test]
fn unreached_target_reports_failed_last_call() {
    let mut screen = FakeScreen::new(1920, 1080, 96);
    screen.ladder.clear();
    screen.step_result = |index| index != 4;

    assert!(!set_dpi(&screen, 150).unwrap());
    assert_eq!(screen.scaling_call_count(), 9);
}

#[test]
fn earlier_failures_do_not_leak_into_result() {
    let mut screen = FakeScreen::new(1920, 1080, 96);
    screen.ladder.clear();
    screen.step_result = |index| index == 4;

    assert!(set_dpi(&screen, 150).unwrap());
}

#[test]
fn dpi_query_failure_is_an_error() {
    let mut screen = FakeScreen::new(1920, 1080, 96);
    screen.fail_queries = true;

    assert!(set_dpi(&screen, 150).is_err());
    assert_eq!(screen.scaling_call_count(), 0);
}
