use super::*;

#[test]
fn wrap_unit_folds_into_half_open_range() {
    assert_eq!(wrap_unit(0.0), 0.0);
    assert_eq!(wrap_unit(1.0), 0.0);
    assert_eq!(wrap_unit(1.25), 0.25);
    assert_eq!(wrap_unit(-0.25), 0.75);
    assert_eq!(wrap_unit(f64::NAN), 0.0);
    assert!(wrap_unit(-1e-20) < 1.0);
}

#[test]
fn ping_pong_peaks_at_half_period() {
    assert_eq!(ping_pong(0.0), 0.0);
    assert_eq!(ping_pong(0.5), 1.0);
    assert!((ping_pong(0.25) - 0.5).abs() < 1e-12);
    assert!((ping_pong(0.1) - ping_pong(0.9)).abs() < 1e-12);
}

#[test]
fn cosine_ease_hits_endpoints() {
    assert_eq!(cosine_ease(0.0), 0.0);
    assert_eq!(cosine_ease(1.0), 1.0);
    assert!((cosine_ease(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn lerp_truncates_like_integer_cast() {
    assert_eq!(lerp_u8(26, 128, 0.0), 26);
    assert_eq!(lerp_u8(26, 128, 1.0), 128);
    assert_eq!(lerp_u8(0, 10, 0.99), 9);
    assert_eq!(lerp_u8(10, 0, 0.5), 5);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(255, 0), 0);
    assert_eq!(mul_div255(128, 255), 128);
}
