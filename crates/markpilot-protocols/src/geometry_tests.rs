use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_rect_dimensions() {
    let rect = Rect::new(10, 20, 110, 70);
    assert_eq!(rect.width(), 100);
    assert_eq!(rect.height(), 50);
    assert_eq!(rect.center(), Point::new(60, 45));
}

#[test]
fn test_crop_full_rate_is_identity() {
    let rect = Rect::new(10, 20, 110, 70);
    assert_eq!(rect.crop(CropRate::default()), rect);
}

#[test]
fn test_crop_selects_sub_rectangle() {
    let rect = Rect::new(0, 0, 100, 200);
    let cropped = rect.crop(CropRate(0.25, 0.5, 0.75, 1.0));
    assert_eq!(cropped, Rect::new(25, 100, 75, 200));
}

#[test]
fn test_crop_does_not_mutate_original() {
    let rect = Rect::new(0, 0, 100, 100);
    let _ = rect.crop(CropRate(0.0, 0.0, 0.5, 0.5));
    assert_eq!(rect, Rect::new(0, 0, 100, 100));
}

#[test]
fn test_translate() {
    let rect = Rect::new(10, 10, 20, 20);
    assert_eq!(rect.translate(5, -3), Rect::new(15, 7, 25, 17));
}

#[test]
fn test_random_point_stays_inside() {
    let rect = Rect::new(40, 60, 140, 120);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let p = rect.random_point(&mut rng);
        assert!(p.x >= rect.left && p.x <= rect.right);
        assert!(p.y >= rect.top && p.y <= rect.bottom);
    }
}

#[test]
fn test_random_point_degenerate_rect() {
    let rect = Rect::new(5, 5, 5, 5);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(rect.random_point(&mut rng), Point::new(5, 5));
}

#[test]
fn test_random_point_is_deterministic_for_same_seed() {
    let rect = Rect::new(0, 0, 1000, 1000);
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    assert_eq!(rect.random_point(&mut a), rect.random_point(&mut b));
}
