use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("galton_png_{}_{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn frame() -> Frame {
    Frame {
        width: 2,
        height: 1,
        data: vec![255, 0, 0, 255, 64, 0, 0, 128],
        premultiplied: true,
    }
}

#[test]
fn writes_numbered_pngs() {
    let dir = scratch_dir("numbered");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        width: 2,
        height: 1,
        fps: 10,
    })
    .unwrap();
    sink.push_frame(FrameIndex(0), &frame()).unwrap();
    sink.push_frame(FrameIndex(1), &frame()).unwrap();
    sink.end().unwrap();

    assert_eq!(
        sink.written(),
        &[dir.join("frame_00000.png"), dir.join("frame_00001.png")]
    );
    let img = image::open(dir.join("frame_00001.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [128, 0, 0, 128]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn prefix_and_size_mismatch() {
    let dir = scratch_dir("prefix");
    let mut sink = PngSequenceSink::new(&dir).with_prefix("gen");
    assert_eq!(sink.frame_path(FrameIndex(7)), dir.join("gen_00007.png"));

    sink.begin(SinkConfig {
        width: 4,
        height: 4,
        fps: 10,
    })
    .unwrap();
    assert!(sink.push_frame(FrameIndex(0), &frame()).is_err());
    assert!(sink.written().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn end_without_begin_fails() {
    let mut sink = PngSequenceSink::new(scratch_dir("unstarted"));
    assert!(sink.end().is_err());
}
