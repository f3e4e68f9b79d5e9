use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_edges() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(MAX_CANVAS_EDGE + 1, 10).is_err());
    assert!(Canvas::new(MAX_CANVAS_EDGE, 1).is_ok());
    assert_eq!(Canvas::square(64).unwrap().pixel_count(), 4096);
}

#[test]
fn frame_phase_is_evenly_spaced_and_wraps() {
    assert_eq!(FrameIndex(0).phase(4), 0.0);
    assert_eq!(FrameIndex(1).phase(4), 0.25);
    assert_eq!(FrameIndex(3).phase(4), 0.75);
    assert_eq!(FrameIndex(4).phase(4), FrameIndex(0).phase(4));
    assert_eq!(FrameIndex(7).phase(0), 0.0);
}

#[test]
fn gray_replicates_channels() {
    assert_eq!(Rgb8::gray(26).to_array(), [26, 26, 26]);
    assert_eq!(Rgba8::opaque(Rgb8::WHITE).to_array(), [255, 255, 255, 255]);
    assert_eq!(Rgba8::TRANSPARENT.a, 0);
}
