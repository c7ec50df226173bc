use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn range_inclusive_hits_both_bounds_and_nothing_else() {
    let mut rng = Rng64::new(7);
    let mut seen = [false; 7];
    for _ in 0..2_000 {
        let v = rng.range_inclusive(-3, 3);
        assert!((-3..=3).contains(&v));
        seen[(v + 3) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn range_inclusive_single_value_and_reversed_bounds() {
    let mut rng = Rng64::new(1);
    assert_eq!(rng.range_inclusive(4, 4), 4);
    for _ in 0..100 {
        let v = rng.range_inclusive(2, -2);
        assert!((-2..=2).contains(&v));
    }
}

#[test]
fn coin_is_roughly_fair() {
    let mut rng = Rng64::new(99);
    let heads = (0..10_000).filter(|_| rng.coin()).count();
    assert!((4_500..5_500).contains(&heads), "heads={heads}");
}

#[test]
fn pick_index_handles_empty() {
    let mut rng = Rng64::new(0);
    assert_eq!(rng.pick_index(0), None);
    assert_eq!(rng.pick_index(1), Some(0));
}
