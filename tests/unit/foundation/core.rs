use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_sides() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    assert_eq!(Canvas::new(600, 400).unwrap().rgba8_len(), 600 * 400 * 4);
}

#[test]
fn premul_scales_color_channels_only() {
    assert_eq!(Rgba8::rgb(10, 20, 30).to_premul(), [10, 20, 30, 255]);
    assert_eq!(Rgba8::rgba(255, 128, 0, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 128).to_premul(), [128, 128, 128, 128]);
}

#[test]
fn direction_serializes_as_signed_step() {
    assert_eq!(serde_json::to_string(&Direction::Left).unwrap(), "-1");
    assert_eq!(serde_json::to_string(&Direction::Origin).unwrap(), "0");
    let d: Direction = serde_json::from_str("1").unwrap();
    assert_eq!(d, Direction::Right);
    assert!(serde_json::from_str::<Direction>("2").is_err());
}
