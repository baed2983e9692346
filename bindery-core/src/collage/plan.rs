use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    collage::model::{CollageSpec, FillMode},
    foundation::error::BinderyResult,
};

/// Bounded attempts when placing a duplicate cover away from identical neighbors.
const DUPLICATE_PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Fractional cell geometry of a collage grid.
///
/// Cell sizes are kept fractional so gaps distribute exactly as in the
/// published banner; pixel rects are rounded per cell in [`Self::cell_rect`].
pub struct GridGeometry {
    /// Grid column count.
    pub cols: u32,
    /// Grid row count.
    pub rows: u32,
    /// Gap between cells in pixels.
    pub gap_px: f64,
    /// Fractional cell width.
    pub cell_w: f64,
    /// Fractional cell height.
    pub cell_h: f64,
}

impl GridGeometry {
    /// Derive geometry from a validated spec.
    ///
    /// `cell = (canvas - (n-1)*gap) / n` per axis, so the gaps fit without
    /// overflowing the canvas.
    pub fn for_spec(spec: &CollageSpec) -> BinderyResult<Self> {
        spec.validate()?;
        let cell_w =
            (f64::from(spec.width) - (f64::from(spec.cols) - 1.0) * spec.gap_px) / f64::from(spec.cols);
        let cell_h =
            (f64::from(spec.height) - (f64::from(spec.rows) - 1.0) * spec.gap_px) / f64::from(spec.rows);
        Ok(Self {
            cols: spec.cols,
            rows: spec.rows,
            gap_px: spec.gap_px,
            cell_w,
            cell_h,
        })
    }

    /// Total number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Integer pixel rect `(x, y, w, h)` of the cell at `index`, row-major.
    pub fn cell_rect(&self, index: usize) -> (u32, u32, u32, u32) {
        let row = index / self.cols as usize;
        let col = index % self.cols as usize;
        let x = col as f64 * (self.cell_w + self.gap_px);
        let y = row as f64 * (self.cell_h + self.gap_px);
        (
            x.round() as u32,
            y.round() as u32,
            self.cell_w.round().max(1.0) as u32,
            self.cell_h.round().max(1.0) as u32,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Content of one grid cell.
pub enum CellSlot {
    /// Draw the cover at this source index.
    Cover(usize),
    /// Draw the placeholder fill.
    Placeholder,
}

#[derive(Clone, Debug)]
/// Row-major cell plan for a collage, produced by [`compile_grid_plan`].
pub struct GridPlan {
    /// One slot per grid cell, `cols * rows` in total.
    pub cells: Vec<CellSlot>,
}

/// Build the seeded random generator for a spec.
pub fn rng_for_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Shuffle the covers and assign every grid cell a slot.
///
/// `loaded` holds one entry per spec source, `None` for failed loads. The
/// shuffled sources fill cells `0..sources` (capped at the cell count);
/// failed loads and leftover cells become placeholders, then the
/// [`FillMode::Duplicates`] pass reuses loaded covers for the remaining
/// placeholders while avoiding identical orthogonal or diagonal neighbors.
/// Pure and deterministic for a given generator state.
pub fn compile_grid_plan<T, R: Rng>(
    spec: &CollageSpec,
    loaded: &[Option<T>],
    rng: &mut R,
) -> BinderyResult<GridPlan> {
    spec.validate()?;
    let cell_count = spec.cell_count();

    let mut order: Vec<usize> = (0..loaded.len()).collect();
    order.shuffle(rng);

    let mut cells = vec![CellSlot::Placeholder; cell_count];
    for (cell, &src) in order.iter().take(cell_count).enumerate() {
        if loaded[src].is_some() {
            cells[cell] = CellSlot::Cover(src);
        }
    }

    if spec.fill == FillMode::Duplicates {
        fill_with_duplicates(&mut cells, spec.cols as usize, loaded, rng);
    }

    Ok(GridPlan { cells })
}

fn fill_with_duplicates<T, R: Rng>(
    cells: &mut [CellSlot],
    cols: usize,
    loaded: &[Option<T>],
    rng: &mut R,
) {
    let pool: Vec<usize> = (0..loaded.len()).filter(|&i| loaded[i].is_some()).collect();
    if pool.is_empty() {
        return;
    }

    for cell in 0..cells.len() {
        if cells[cell] != CellSlot::Placeholder {
            continue;
        }
        for _ in 0..DUPLICATE_PLACEMENT_ATTEMPTS {
            let candidate = pool[rng.gen_range(0..pool.len())];
            if !has_identical_neighbor(cells, cols, cell, candidate) {
                cells[cell] = CellSlot::Cover(candidate);
                break;
            }
        }
    }
}

/// True when any of the up-to-eight neighbors of `cell` already shows `candidate`.
fn has_identical_neighbor(cells: &[CellSlot], cols: usize, cell: usize, candidate: usize) -> bool {
    let rows = cells.len() / cols;
    let row = (cell / cols) as i64;
    let col = (cell % cols) as i64;

    for dr in -1..=1i64 {
        for dc in -1..=1i64 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = (row + dr, col + dc);
            if r < 0 || c < 0 || r >= rows as i64 || c >= cols as i64 {
                continue;
            }
            let neighbor = r as usize * cols + c as usize;
            if cells[neighbor] == CellSlot::Cover(candidate) {
                return true;
            }
        }
    }
    false
}

impl GridPlan {
    /// Number of cells that draw a cover.
    pub fn cover_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|s| matches!(s, CellSlot::Cover(_)))
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collage/plan.rs"]
mod tests;
