use std::sync::Arc;
use std::time::Duration;

use markpilot_protocols::{CropRate, Ctx, Rect};

use super::ClickExecutor;
use crate::executor::Executor;
use crate::testkit::{found, missing, FakeCore, RecordingPacer};

fn marker_rect() -> Rect {
    Rect::new(0, 0, 100, 100)
}

#[test]
fn test_precondition_fails_when_marker_missing() {
    let core = Arc::new(FakeCore::new().on_find(missing("ok_button")));
    let mut exec = ClickExecutor::new(core.clone(), "ok_button")
        .with_pacer(Box::new(RecordingPacer::new()));
    let mut ctx = Ctx::new();

    assert!(!exec.run(&mut ctx).unwrap());
    assert!(core.clicks().is_empty());
}

#[test]
fn test_run_clicks_cropped_and_offset_region() {
    let core = Arc::new(
        FakeCore::new()
            .on_find(found("ok_button", marker_rect(), 0.97))
            .on_find(found("ok_button", marker_rect(), 0.97)),
    );
    let mut exec = ClickExecutor::new(core.clone(), "ok_button")
        .with_click_area(CropRate(0.0, 0.0, 0.5, 0.5))
        .with_offset(10, 5)
        .with_pacer(Box::new(RecordingPacer::new()));
    let mut ctx = Ctx::new();

    assert!(exec.run(&mut ctx).unwrap());
    assert_eq!(core.clicks(), vec![Rect::new(10, 5, 60, 55)]);
}

#[test]
fn test_click_count_is_honored() {
    let core = Arc::new(
        FakeCore::new()
            .on_find(found("ok_button", marker_rect(), 0.97))
            .on_find(found("ok_button", marker_rect(), 0.97)),
    );
    let mut exec = ClickExecutor::new(core.clone(), "ok_button")
        .with_clicks(3)
        .with_pacer(Box::new(RecordingPacer::new()));
    let mut ctx = Ctx::new();

    assert!(exec.run(&mut ctx).unwrap());
    assert_eq!(core.clicks().len(), 3);
}

#[test]
fn test_reusing_hit_detection_skips_second_detection_pass() {
    // Only one scripted result: a second detection pass would miss.
    let core = Arc::new(FakeCore::new().on_find(found("ok_button", marker_rect(), 0.97)));
    let mut exec = ClickExecutor::new(core.clone(), "ok_button")
        .reusing_hit_detection()
        .with_pacer(Box::new(RecordingPacer::new()));
    let mut ctx = Ctx::new();

    assert!(exec.run(&mut ctx).unwrap());
    assert_eq!(core.find_count(), 1);
    assert_eq!(core.clicks().len(), 1);
}

#[test]
fn test_action_fails_when_marker_vanishes_between_phases() {
    let core = Arc::new(FakeCore::new().on_find(found("ok_button", marker_rect(), 0.97)));
    let mut exec = ClickExecutor::new(core.clone(), "ok_button")
        .with_pacer(Box::new(RecordingPacer::new()));
    let mut ctx = Ctx::new();

    assert!(!exec.run(&mut ctx).unwrap());
    assert!(core.clicks().is_empty());
}

#[test]
fn test_pauses_surround_the_clicks() {
    let core = Arc::new(
        FakeCore::new()
            .on_find(found("ok_button", marker_rect(), 0.97))
            .on_find(found("ok_button", marker_rect(), 0.97)),
    );
    let pacer = RecordingPacer::new();
    let slept = pacer.slept_handle();
    let mut exec = ClickExecutor::new(core, "ok_button")
        .with_pauses(Duration::from_millis(300), Duration::from_millis(150))
        .with_pacer(Box::new(pacer));
    let mut ctx = Ctx::new();

    assert!(exec.run(&mut ctx).unwrap());
    assert_eq!(
        *slept.lock().unwrap(),
        vec![Duration::from_millis(300), Duration::from_millis(150)]
    );
}
