use super::*;

fn bw() -> Gradient {
    Gradient::from_strs(&["#000000", "#ffffff"]).unwrap()
}

fn within(v: u8, a: u8, b: u8) -> bool {
    v >= a.min(b) && v <= a.max(b)
}

#[test]
fn endpoints_return_first_and_last_stop() {
    let g = Gradient::from_strs(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();
    assert_eq!(g.interpolate(0.0), Rgba8::rgb(255, 0, 0));
    assert_eq!(g.interpolate(1.0), Rgba8::rgb(0, 0, 255));
}

#[test]
fn ratio_one_is_clamped_onto_last_interval() {
    let g = bw();
    assert_eq!(g.interpolate(1.0), Rgba8::rgb(255, 255, 255));
    assert_eq!(g.interpolate(1.7), Rgba8::rgb(255, 255, 255));
    assert_eq!(g.interpolate(-0.3), Rgba8::rgb(0, 0, 0));
    assert_eq!(g.interpolate(f64::NAN), Rgba8::rgb(0, 0, 0));
}

#[test]
fn midpoint_rounds_half_away_from_zero() {
    assert_eq!(bw().interpolate(0.5), Rgba8::rgb(0x80, 0x80, 0x80));
}

#[test]
fn interior_ratios_stay_between_bounding_stops() {
    let g = Gradient::from_strs(&["#102030", "#f0a000", "#20ff60", "#000000"]).unwrap();
    let stops = g.stops().to_vec();
    for i in 1..100 {
        let ratio = f64::from(i) / 100.0;
        let scaled = ratio * 3.0;
        let idx = (scaled.floor() as usize).min(2);
        let (a, b) = (stops[idx], stops[idx + 1]);
        let c = g.interpolate(ratio);
        assert!(within(c.r, a.r, b.r), "ratio {ratio}: r");
        assert!(within(c.g, a.g, b.g), "ratio {ratio}: g");
        assert!(within(c.b, a.b, b.b), "ratio {ratio}: b");
    }
}

#[test]
fn interval_boundaries_hit_control_colors() {
    let g = Gradient::from_strs(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();
    assert_eq!(g.interpolate(0.5), Rgba8::rgb(0, 255, 0));
}

#[test]
fn single_stop_gradient_is_constant() {
    let g = Gradient::from_strs(&["#abcdef"]).unwrap();
    assert_eq!(g.interpolate(0.0), g.interpolate(1.0));
    assert_eq!(g.interpolate(0.4), Rgba8::rgb(0xab, 0xcd, 0xef));
}

#[test]
fn empty_gradient_is_rejected() {
    assert!(Gradient::new(Vec::new()).is_err());
    assert!(serde_json::from_str::<Gradient>("[]").is_err());
    let g: Gradient = serde_json::from_str(r##"["#000000", "#ffffff"]"##).unwrap();
    assert_eq!(g, bw());
}
