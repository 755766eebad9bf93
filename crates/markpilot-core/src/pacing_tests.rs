use super::*;
use crate::testkit::RecordingPacer;

#[test]
fn test_jitter_stays_within_twenty_percent() {
    let mut pacer = RandomPacer::seeded(1);
    let base = Duration::from_secs(1);
    for _ in 0..200 {
        let jittered = pacer.jitter(base);
        assert!(jittered >= Duration::from_millis(800));
        assert!(jittered <= Duration::from_millis(1200));
    }
}

#[test]
fn test_jitter_is_deterministic_for_same_seed() {
    let mut a = RandomPacer::seeded(42);
    let mut b = RandomPacer::seeded(42);
    let base = Duration::from_millis(300);
    for _ in 0..20 {
        assert_eq!(a.jitter(base), b.jitter(base));
    }
}

#[test]
fn test_jitter_of_zero_is_zero() {
    let mut pacer = RandomPacer::seeded(7);
    assert_eq!(pacer.jitter(Duration::ZERO), Duration::ZERO);
}

#[test]
fn test_between_respects_bounds() {
    let mut pacer = RandomPacer::seeded(3);
    let lo = Duration::from_millis(200);
    let hi = Duration::from_millis(500);
    for _ in 0..200 {
        let d = pacer.between(lo, hi);
        assert!(d >= lo && d <= hi);
    }
}

#[test]
fn test_between_with_collapsed_range_returns_lower_bound() {
    let mut pacer = RandomPacer::seeded(3);
    let d = Duration::from_millis(100);
    assert_eq!(pacer.between(d, d), d);
}

#[test]
fn test_point_in_lands_inside_rect() {
    let mut pacer = RandomPacer::seeded(9);
    let rect = Rect::new(10, 20, 110, 220);
    for _ in 0..100 {
        let p = pacer.point_in(&rect);
        assert!(p.x >= rect.left && p.x <= rect.right);
        assert!(p.y >= rect.top && p.y <= rect.bottom);
    }
}

#[test]
fn test_pause_skips_sleep_for_zero_base() {
    let mut pacer = RecordingPacer::new();
    let slept = pacer.slept_handle();
    pacer.pause(Duration::ZERO);
    assert!(slept.lock().unwrap().is_empty());
}

#[test]
fn test_pause_sleeps_jittered_base() {
    let mut pacer = RecordingPacer::new();
    let slept = pacer.slept_handle();
    pacer.pause(Duration::from_millis(100));
    assert_eq!(*slept.lock().unwrap(), vec![Duration::from_millis(100)]);
}
