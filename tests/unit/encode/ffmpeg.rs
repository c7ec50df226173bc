use super::*;

#[test]
fn premultiply_scales_color_by_alpha() {
    assert_eq!(
        premultiply(&[255, 128, 0, 128, 9, 9, 9, 255]),
        vec![128, 64, 0, 128, 9, 9, 9, 255]
    );
}

#[test]
fn odd_dimensions_are_rejected_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(
        std::env::temp_dir().join("galton_odd.mp4"),
    ));
    let err = sink
        .begin(SinkConfig {
            width: 3,
            height: 2,
            fps: 20,
        })
        .unwrap_err();
    assert!(matches!(err, GaltonError::Validation(_)));
}

#[test]
fn push_and_end_require_begin() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    let frame = Frame {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn encodes_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let out = std::env::temp_dir().join(format!("galton_ffmpeg_{}.mp4", std::process::id()));
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    sink.begin(SinkConfig {
        width: 16,
        height: 16,
        fps: 10,
    })
    .unwrap();
    let frame = Frame {
        width: 16,
        height: 16,
        data: vec![200; 16 * 16 * 4],
        premultiplied: true,
    };
    for i in 0..3 {
        sink.push_frame(FrameIndex(i), &frame).unwrap();
    }
    sink.end().unwrap();
    assert!(out.exists());
    let _ = std::fs::remove_file(&out);
}
