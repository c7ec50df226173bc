use super::*;

#[test]
fn presets_validate_and_differ_only_in_density_and_pace() {
    let mint = AnimatorConfig::mint();
    let preview = AnimatorConfig::preview();
    mint.validate().unwrap();
    preview.validate().unwrap();
    assert!(preview.num_balls < mint.num_balls);
    assert!(preview.reveal_interval() > mint.reveal_interval());
    assert_eq!(preview.grid, mint.grid);
    assert!(AnimatorConfig::preset("nope").is_err());
}

#[test]
fn visible_render_width_is_forty_percent_of_canvas() {
    let mut cfg = AnimatorConfig::mint();
    cfg.canvas.width = 500;
    assert_eq!(cfg.visible_render_width(), 200.0);
}

#[test]
fn partial_json_falls_back_to_mint_defaults() {
    let cfg =
        AnimatorConfig::from_reader(r#"{ "num_balls": 3, "seed": 9, "grid": { "num_rows": 4 } }"#.as_bytes())
            .unwrap();
    assert_eq!(cfg.num_balls, 3);
    assert_eq!(cfg.seed, Some(9));
    assert_eq!(cfg.grid.num_rows, 4);
    assert_eq!(cfg.grid.step_size, GridSpec::default().step_size);
    assert_eq!(cfg.canvas, AnimatorConfig::mint().canvas);
    cfg.validate().unwrap();
}

#[test]
fn unknown_fields_are_rejected() {
    let err = AnimatorConfig::from_reader(r#"{ "num_ballz": 3 }"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn validate_catches_bad_values() {
    let mut cfg = AnimatorConfig::mint();
    cfg.reveal_interval_ms = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = AnimatorConfig::mint();
    cfg.stroke.line_width = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = AnimatorConfig::mint();
    cfg.stroke.glow_sigma = 0.0;
    assert!(cfg.validate().is_err());
    cfg.stroke.glow_radius = 0;
    cfg.validate().unwrap();

    let mut cfg = AnimatorConfig::mint();
    cfg.canvas.height = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = AnimatorConfig::mint();
    cfg.palette.backgrounds.clear();
    assert!(cfg.validate().is_err());
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = AnimatorConfig::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}
