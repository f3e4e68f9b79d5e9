use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

struct Counter(u32);

impl PhaseSource for Counter {
    fn next_unit(&mut self) -> f64 {
        let v = f64::from(self.0) / 1000.0;
        self.0 += 1;
        v
    }
}

#[test]
fn reference_grid_dimensions() {
    let spec = GridSpec::new(canvas(64, 64), 8).unwrap();
    assert_eq!(spec.half_pitch(), 4);
    assert_eq!(spec.columns(), 17);
    assert_eq!(spec.rows(), 8);
    assert_eq!(spec.column_positions()[0], -4);
    assert_eq!(spec.column_positions()[1], 0);
    assert_eq!(spec.column_positions()[16], 60);
    assert_eq!(spec.row_heights(), &[8; 8]);
}

#[test]
fn remainder_rows_go_first() {
    let spec = GridSpec::new(canvas(16, 70), 8).unwrap();
    assert_eq!(spec.rows(), 8);
    assert_eq!(spec.row_heights(), &[9, 9, 9, 9, 9, 9, 8, 8]);
    assert_eq!(spec.row_positions(), &[0, 9, 18, 27, 36, 45, 54, 62]);
}

#[test]
fn tile_larger_than_canvas_yields_one_row() {
    let spec = GridSpec::new(canvas(10, 5), 64).unwrap();
    assert_eq!(spec.rows(), 1);
    assert_eq!(spec.row_heights(), &[5]);
    assert_eq!(spec.columns(), 2);
}

#[test]
fn strips_and_rows_cover_canvas_exactly() {
    for (w, h) in [(1, 1), (7, 13), (64, 64), (100, 37), (512, 512), (513, 257)] {
        for tile in [1, 2, 3, 5, 8, 9, 64, 600] {
            let spec = GridSpec::new(canvas(w, h), tile).unwrap();
            let widths: u32 = spec.column_strip_widths().iter().sum();
            let heights: u32 = spec.row_heights().iter().sum();
            assert_eq!(widths, w, "{w}x{h} tile {tile}");
            assert_eq!(heights, h, "{w}x{h} tile {tile}");
            assert_eq!(spec.column_strip_widths()[0], 0);
        }
    }
}

#[test]
fn zero_tile_is_rejected() {
    let err = GridSpec::new(canvas(64, 64), 0).unwrap_err();
    assert!(err.to_string().contains("tile_size"));
}

#[test]
fn same_seed_same_offsets() {
    let a = GridLayout::seeded(canvas(64, 64), 8, Some(9)).unwrap();
    let b = GridLayout::seeded(canvas(64, 64), 8, Some(9)).unwrap();
    let c = GridLayout::seeded(canvas(64, 64), 8, Some(10)).unwrap();
    assert_eq!(a.offsets(), b.offsets());
    assert_ne!(a.offsets(), c.offsets());
}

#[test]
fn seed_42_offsets_are_fixed() {
    let layout = GridLayout::seeded(canvas(64, 64), 8, Some(42)).unwrap();
    let offsets = layout.offsets();
    assert_eq!(offsets.get(0, 0), 0.7415648787718233);
    assert_eq!(offsets.get(0, 1), 0.1599103928769201);
    assert_eq!(offsets.get(0, 2), 0.27860113025513866);
    assert_eq!(offsets.get(0, 16), 0.7415648787718233);
    assert_eq!(offsets.get(1, 0), 0.49549865814924343);
}

#[test]
fn wrap_column_matches_first_column_in_every_row() {
    for seed in [0, 1, 42, u64::MAX] {
        let layout = GridLayout::seeded(canvas(37, 23), 6, Some(seed)).unwrap();
        let offsets = layout.offsets();
        for r in 0..offsets.rows() {
            let row = offsets.row(r);
            assert_eq!(row[0], row[row.len() - 1], "seed {seed} row {r}");
        }
        assert!(offsets.as_slice().iter().all(|v| (0.0..1.0).contains(v)));
    }
}

#[test]
fn offsets_are_drawn_row_major_from_injected_source() {
    let spec = GridSpec::new(canvas(8, 8), 4).unwrap();
    let offsets = PhaseOffsets::generate(&spec, &mut Counter(0));
    assert_eq!(spec.columns(), 5);
    assert_eq!(offsets.get(0, 1), 1.0 / 1000.0);
    assert_eq!(offsets.get(1, 1), 6.0 / 1000.0);
    assert_eq!(offsets.get(0, 4), 0.0);
    assert_eq!(offsets.get(1, 4), offsets.get(1, 0));
}

#[test]
fn layout_rejects_mismatched_offsets() {
    let small = GridSpec::new(canvas(8, 8), 4).unwrap();
    let big = GridSpec::new(canvas(16, 8), 4).unwrap();
    let offsets = PhaseOffsets::generate(&small, &mut Rng64::new(1));
    assert!(GridLayout::new(big, offsets.clone()).is_err());
    assert!(GridLayout::new(small, offsets).is_ok());
}

#[test]
fn triangles_alternate_orientation() {
    let layout = GridLayout::seeded(canvas(16, 16), 8, Some(1)).unwrap();
    let cells: Vec<Cell> = layout.cells().collect();
    assert_eq!(cells.len(), layout.spec().cell_count());

    let first = cells[0];
    assert!(first.points_up());
    assert_eq!(
        first.triangle(),
        [
            Point::new(-4.0, 8.0),
            Point::new(4.0, 8.0),
            Point::new(0.0, 0.0)
        ]
    );

    let second = cells[1];
    assert!(!second.points_up());
    assert_eq!(
        second.triangle(),
        [
            Point::new(0.0, 0.0),
            Point::new(8.0, 0.0),
            Point::new(4.0, 8.0)
        ]
    );

    let below = cells[layout.spec().columns()];
    assert_eq!(below.row, 1);
    assert!(!below.points_up());
}
