use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn over_half_alpha_blends_with_opaque_dst() {
    // 50% premultiplied white over opaque black.
    assert_eq!(over([0, 0, 0, 255], [128, 128, 128, 128]), [128, 128, 128, 255]);
}

#[test]
fn over_in_place_checks_lengths() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    over_in_place(&mut dst, &[9, 9, 9, 255, 0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![9, 9, 9, 255, 0, 0, 0, 0]);
}

#[test]
fn fill_writes_every_pixel() {
    let mut buf = vec![0u8; 12];
    fill(&mut buf, [1, 2, 3, 4]);
    assert_eq!(buf, [1, 2, 3, 4].repeat(3));
}

#[test]
fn over_region_writes_only_the_target_rect() {
    // 3x2 surface, 1x2 source placed at column 1.
    let mut dst = vec![0u8; 3 * 2 * 4];
    let src = [7, 7, 7, 255, 8, 8, 8, 255];
    over_region(&mut dst, 3, &src, 1, 0, 1, 2).unwrap();

    let touched: Vec<usize> = dst
        .chunks_exact(4)
        .enumerate()
        .filter(|(_, px)| px[3] != 0)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(touched, vec![1, 4]);
    assert_eq!(&dst[4..8], &[7, 7, 7, 255]);
    assert_eq!(&dst[16..20], &[8, 8, 8, 255]);
}

#[test]
fn over_region_rejects_rects_outside_the_surface() {
    let mut dst = vec![0u8; 2 * 2 * 4];
    assert!(over_region(&mut dst, 2, &[0u8; 8], 1, 0, 2, 1).is_err());
    assert!(over_region(&mut dst, 2, &[0u8; 8], 0, 1, 1, 2).is_err());
}
