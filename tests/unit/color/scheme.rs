use super::*;

#[test]
fn default_palette_is_valid() {
    Palette::default().validate().unwrap();
}

#[test]
fn pick_is_deterministic_per_seed() {
    let palette = Palette::default();
    let a = palette.pick(&mut Rng64::new(42)).unwrap();
    let b = palette.pick(&mut Rng64::new(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn pick_draws_from_palette_lists() {
    let palette = Palette::default();
    let mut rng = Rng64::new(3);
    for _ in 0..50 {
        let s = palette.pick(&mut rng).unwrap();
        assert!(palette.gradients.contains(&s.gradient));
        assert!(palette.backgrounds.contains(&s.background));
        assert!(
            palette
                .tints
                .iter()
                .any(|t| t.left == s.tint_left && t.right == s.tint_right)
        );
    }
}

#[test]
fn empty_lists_are_rejected() {
    let mut palette = Palette::default();
    palette.tints.clear();
    assert!(palette.validate().is_err());
    assert!(palette.pick(&mut Rng64::new(0)).is_none());
}

#[test]
fn palette_parses_from_json() {
    let json = r##"{
        "gradients": [["#000000", "#ffffff"]],
        "tints": [{ "left": "rgba(255, 0, 150, 0.5)", "right": "#00c8ff80" }],
        "backgrounds": ["#101010"]
    }"##;
    let palette: Palette = serde_json::from_str(json).unwrap();
    let s = palette.pick(&mut Rng64::new(1)).unwrap();
    assert_eq!(s.background, Rgba8::rgb(16, 16, 16));
    assert_eq!(s.tint_left, Rgba8::rgba(255, 0, 150, 128));
}
