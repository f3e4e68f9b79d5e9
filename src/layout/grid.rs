use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{ShimmerError, ShimmerResult};
use crate::foundation::rng::{PhaseSource, Rng64};

/// Tile geometry for one canvas/tile-size pair.
///
/// Columns sit half a tile apart so neighbouring triangles interlock. Column 0 starts one
/// half-pitch left of the canvas and only exists so the left edge has no clipped gap. Rows
/// absorb the `height % rows` remainder one pixel at a time from the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSpec {
    canvas: Canvas,
    tile_size: u32,
    half_pitch: u32,
    col_x: Vec<i64>,
    row_y: Vec<u32>,
    row_heights: Vec<u32>,
}

impl GridSpec {
    pub fn new(canvas: Canvas, tile_size: u32) -> ShimmerResult<Self> {
        canvas.validate()?;
        if tile_size == 0 {
            return Err(ShimmerError::validation("tile_size must be > 0"));
        }

        let half_pitch = (tile_size / 2).max(1);
        let base_cols = canvas.width.div_ceil(half_pitch).max(1);
        let cols = base_cols + 1;
        let col_x = (0..cols)
            .map(|i| (i64::from(i) - 1) * i64::from(half_pitch))
            .collect();

        let rows = (canvas.height / tile_size).max(1);
        let base_h = canvas.height / rows;
        let extra_h = canvas.height % rows;
        let row_heights: Vec<u32> = (0..rows)
            .map(|r| base_h + u32::from(r < extra_h))
            .collect();
        let row_y = row_heights
            .iter()
            .scan(0u32, |acc, &h| {
                let y = *acc;
                *acc += h;
                Some(y)
            })
            .collect();

        Ok(Self {
            canvas,
            tile_size,
            half_pitch,
            col_x,
            row_y,
            row_heights,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn half_pitch(&self) -> u32 {
        self.half_pitch
    }

    /// Column count, including the off-canvas leading column.
    pub fn columns(&self) -> usize {
        self.col_x.len()
    }

    pub fn rows(&self) -> usize {
        self.row_heights.len()
    }

    pub fn cell_count(&self) -> usize {
        self.columns() * self.rows()
    }

    pub fn column_positions(&self) -> &[i64] {
        &self.col_x
    }

    pub fn row_positions(&self) -> &[u32] {
        &self.row_y
    }

    pub fn row_heights(&self) -> &[u32] {
        &self.row_heights
    }

    /// Visible width of each column's half-pitch strip, clipped to the canvas.
    ///
    /// The strips partition `[0, width)`, so these sum to the canvas width.
    pub fn column_strip_widths(&self) -> Vec<u32> {
        let w = i64::from(self.canvas.width);
        let pitch = i64::from(self.half_pitch);
        self.col_x
            .iter()
            .map(|&x| {
                let lo = x.clamp(0, w);
                let hi = (x + pitch).clamp(0, w);
                (hi - lo) as u32
            })
            .collect()
    }

    fn cell_at(&self, row: usize, col: usize, phase_offset: f64) -> Cell {
        Cell {
            row,
            col,
            phase_offset,
            x: self.col_x[col],
            y: i64::from(self.row_y[row]),
            width: self.tile_size,
            height: self.row_heights[row],
        }
    }
}

/// Per-cell phase offsets in `[0, 1)`, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseOffsets {
    columns: usize,
    rows: usize,
    values: Vec<f64>,
}

impl PhaseOffsets {
    /// Draw one offset per cell in row-major order, then copy each row's first-column offset
    /// onto its last column so the pattern wraps horizontally.
    pub fn generate(spec: &GridSpec, source: &mut dyn PhaseSource) -> Self {
        let columns = spec.columns();
        let rows = spec.rows();
        let mut values: Vec<f64> = (0..columns * rows).map(|_| source.next_unit()).collect();
        for row in values.chunks_exact_mut(columns) {
            row[columns - 1] = row[0];
        }
        Self {
            columns,
            rows,
            values,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.columns + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.columns;
        &self.values[start..start + self.columns]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// One triangular tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub phase_offset: f64,
    /// Left edge; negative for the leading column.
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Cell {
    /// Even `row + col` points up, odd points down.
    pub fn points_up(&self) -> bool {
        (self.row + self.col).is_multiple_of(2)
    }

    /// Triangle vertices on integer pixel-corner coordinates.
    pub fn triangle(&self) -> [Point; 3] {
        let x0 = self.x;
        let x1 = self.x + i64::from(self.width);
        let y0 = self.y;
        let y1 = self.y + i64::from(self.height);
        let mid = (x0 + x1).div_euclid(2);
        let p = |x: i64, y: i64| Point::new(x as f64, y as f64);
        if self.points_up() {
            [p(x0, y1), p(x1, y1), p(mid, y0)]
        } else {
            [p(x0, y0), p(x1, y0), p(mid, y1)]
        }
    }
}

/// Geometry plus phase offsets; computed once per run and shared read-only by every frame.
#[derive(Clone, Debug)]
pub struct GridLayout {
    spec: GridSpec,
    offsets: PhaseOffsets,
}

impl GridLayout {
    pub fn new(spec: GridSpec, offsets: PhaseOffsets) -> ShimmerResult<Self> {
        if offsets.columns() != spec.columns() || offsets.rows() != spec.rows() {
            return Err(ShimmerError::validation(format!(
                "phase offsets are {}x{} but the grid is {}x{}",
                offsets.columns(),
                offsets.rows(),
                spec.columns(),
                spec.rows()
            )));
        }
        Ok(Self { spec, offsets })
    }

    pub fn generate(
        canvas: Canvas,
        tile_size: u32,
        source: &mut dyn PhaseSource,
    ) -> ShimmerResult<Self> {
        let spec = GridSpec::new(canvas, tile_size)?;
        let offsets = PhaseOffsets::generate(&spec, source);
        Ok(Self { spec, offsets })
    }

    /// `None` seeds from the clock, so unseeded layouts are not reproducible.
    pub fn seeded(canvas: Canvas, tile_size: u32, seed: Option<u64>) -> ShimmerResult<Self> {
        let mut rng = seed.map_or_else(Rng64::from_entropy, Rng64::new);
        Self::generate(canvas, tile_size, &mut rng)
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn offsets(&self) -> &PhaseOffsets {
        &self.offsets
    }

    /// Cells in row-major draw order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.spec.columns();
        (0..self.spec.cell_count()).map(move |idx| {
            let (row, col) = (idx / cols, idx % cols);
            self.spec.cell_at(row, col, self.offsets.get(row, col))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
