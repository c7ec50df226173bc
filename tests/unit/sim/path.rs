use super::*;

fn grid(num_rows: u32, step_size: f64) -> GridSpec {
    GridSpec {
        num_rows,
        total_cols: 16,
        visible_cols: 8,
        step_size,
    }
}

#[test]
fn single_ball_two_rows_scenario() {
    let g = grid(2, 30.0);
    let batch = simulate_batch(&g, 1, 600.0, &mut Rng64::new(5));
    assert_eq!(batch.len(), 1);

    let pts = batch[0].points();
    assert_eq!(pts.len(), 3);
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![0.0, 30.0, 60.0]);
    for w in pts.windows(2) {
        assert_eq!((w[1].x - w[0].x).abs(), 30.0);
    }
}

#[test]
fn every_path_has_exact_shape() {
    let g = grid(12, 7.5);
    let mut rng = Rng64::new(11);
    let batch = simulate_batch(&g, 40, 800.0, &mut rng);
    assert_eq!(batch.len(), 40);

    for path in &batch {
        let pts = path.points();
        assert_eq!(pts.len(), 13);
        assert_eq!(pts[0].y, 0.0);
        assert_eq!(pts[0].direction, Direction::Origin);
        assert_eq!(pts[pts.len() - 1].y, g.path_depth());
        for w in pts.windows(2) {
            assert_eq!(w[1].y - w[0].y, 7.5);
            let dx = w[1].x - w[0].x;
            match w[1].direction {
                Direction::Left => assert_eq!(dx, -7.5),
                Direction::Right => assert_eq!(dx, 7.5),
                Direction::Origin => panic!("origin direction after first vertex"),
            }
        }
    }
}

#[test]
fn start_columns_respect_bounds_after_centering() {
    let g = grid(1, 10.0);
    let dx = g.center_offset(400.0);
    let batch = simulate_batch(&g, 500, 400.0, &mut Rng64::new(8));
    for path in &batch {
        let col = (path.points()[0].x - dx) / 10.0;
        assert_eq!(col.fract(), 0.0);
        assert!((-8.0..=8.0).contains(&col), "col={col}");
    }
}

#[test]
fn simulation_is_reproducible_per_seed() {
    let g = grid(6, 30.0);
    let a = simulate_batch(&g, 5, 600.0, &mut Rng64::new(77));
    let b = simulate_batch(&g, 5, 600.0, &mut Rng64::new(77));
    assert_eq!(a, b);
}

#[test]
fn segments_carry_end_vertex_direction() {
    let path = simulate_path(&grid(4, 1.0), &mut Rng64::new(2));
    let segs: Vec<Segment> = path.segments().collect();
    assert_eq!(segs.len(), 4);
    for (seg, end) in segs.iter().zip(&path.points()[1..]) {
        assert_eq!(seg.direction, end.direction);
        assert_eq!(seg.mid_y(), end.y - 0.5);
    }
}
