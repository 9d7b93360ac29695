// Instanced wave grid: slot layout, height clamp and scroll response.

use backdrop_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn grid() -> WaveGrid {
    let mut rng = StdRng::seed_from_u64(21);
    WaveGrid::new(WaveParams::wave_grid(), Viewport::new(1600.0, 900.0), &mut rng)
}

#[test]
fn height_never_drops_below_floor() {
    let params = WaveParams::wave_grid();
    let times = [0.0, 0.37, 1.0, 12.5, 1.0e4, -3.0, f32::MAX, f32::NAN];
    let scrolls = [0.0, 240.0, 9999.0, -50.0, f32::INFINITY, f32::NAN];
    for row in 0..params.rows {
        for col in 0..params.cols {
            for &t in &times {
                for &s in &scrolls {
                    let h = wave_height(&params, row, col, t, s);
                    assert!(h >= constants::MIN_WAVE_HEIGHT, "h={h} at ({row},{col}) t={t} s={s}");
                }
            }
        }
    }
}

#[test]
fn deep_troughs_clamp_to_exactly_the_floor() {
    let params = WaveParams {
        base: -10.0,
        ..WaveParams::wave_grid()
    };
    assert_eq!(wave_height(&params, 3, 4, 1.0, 0.0), constants::MIN_WAVE_HEIGHT);
}

#[test]
fn slot_index_and_cell_are_inverse() {
    let g = grid();
    let p = g.params();
    let mut seen = vec![false; p.rows * p.cols];
    for row in 0..p.rows {
        for col in 0..p.cols {
            let i = g.slot_index(row, col);
            assert!(!seen[i]);
            seen[i] = true;
            assert_eq!(g.cell(i), (row, col));
        }
    }
    assert!(seen.into_iter().all(|s| s));
}

#[test]
fn grid_origins_follow_the_layout_formula() {
    let g = grid();
    let p = g.params().clone();
    let first = g.slots()[g.slot_index(0, 0)].origin;
    let last = g.slots()[g.slot_index(p.rows - 1, p.cols - 1)].origin;
    assert!((first.x + last.x).abs() < 1e-4);
    assert!((first.z + last.z).abs() < 1e-4);
    assert!((last.x - first.x - (p.cols as f32 - 1.0) * p.spacing).abs() < 1e-3);
    let next = g.slots()[g.slot_index(0, 1)].origin;
    assert!((next.x - first.x - p.spacing).abs() < 1e-5);
    assert!(g.slots().iter().all(|s| s.origin.y == 0.0));
}

#[test]
fn update_writes_heights_from_time_and_scroll() {
    let mut g = grid();
    let mut input = InputState::new(Viewport::new(1600.0, 900.0));
    input.scrolled(480.0);
    g.update(&input, 2.0);
    for (i, slot) in g.slots().iter().enumerate() {
        let (row, col) = g.cell(i);
        assert_eq!(slot.height, wave_height(g.params(), row, col, 2.0, 480.0));
    }

    let before: Vec<f32> = g.slots().iter().map(|s| s.height).collect();
    input.scrolled(1480.0);
    g.update(&input, 2.0);
    let changed = g
        .slots()
        .iter()
        .zip(before)
        .filter(|(s, h)| s.height != *h)
        .count();
    assert!(changed > 0);
}

#[test]
fn bars_stand_on_the_floor_with_scaled_height() {
    let mut g = grid();
    let input = InputState::new(Viewport::new(1600.0, 900.0));
    g.update(&input, 0.5);
    let mut out = Vec::new();
    g.write_instances(&mut out);
    assert_eq!(out.len(), g.slots().len());
    for (inst, slot) in out.iter().zip(g.slots()) {
        let tall = slot.height * g.params().bar_height;
        // translation column
        assert!((inst.model[3][1] - tall * 0.5).abs() < 1e-4);
        assert!(inst.model[3][1] > 0.0);
    }
}

#[test]
fn bars_spin_by_their_fixed_increment() {
    let mut g = grid();
    let input = InputState::new(Viewport::new(1600.0, 900.0));
    let before: Vec<(f32, f32)> = g.slots().iter().map(|s| (s.yaw, s.spin)).collect();
    g.update(&input, 0.0);
    for (slot, (yaw, spin)) in g.slots().iter().zip(before) {
        assert_eq!(slot.spin, spin);
        assert!((slot.yaw - (yaw + spin)).abs() < 1e-6);
        assert_eq!(slot.position, slot.origin);
    }
}
