use super::*;
use crate::collage::model::{CollageSpec, FillMode};

fn spec(width: u32, height: u32, cols: u32, rows: u32) -> CollageSpec {
    CollageSpec {
        width,
        height,
        cols,
        rows,
        gap_px: 2.0,
        background_rgb8: [255, 255, 255],
        placeholder_rgb8: [0xf8, 0xf9, 0xfa],
        fill: FillMode::Placeholder,
        seed: Some(1),
        sources: Vec::new(),
    }
}

fn all_loaded(n: usize) -> Vec<Option<()>> {
    vec![Some(()); n]
}

#[test]
fn banner_geometry_matches_published_run() {
    let geometry = GridGeometry::for_spec(&spec(1080, 360, 14, 4)).unwrap();
    assert_eq!(geometry.cell_count(), 56);
    assert!((geometry.cell_w - (1080.0 - 13.0 * 2.0) / 14.0).abs() < 1e-9);
    assert!((geometry.cell_h - 88.5).abs() < 1e-9);

    assert_eq!(geometry.cell_rect(0), (0, 0, 75, 89));
    assert_eq!(geometry.cell_rect(1), (77, 0, 75, 89));
    assert_eq!(geometry.cell_rect(14), (0, 91, 75, 89));
}

#[test]
fn cells_tile_without_overflow() {
    let geometry = GridGeometry::for_spec(&spec(100, 50, 2, 1)).unwrap();
    assert_eq!(geometry.cell_rect(0), (0, 0, 49, 50));
    assert_eq!(geometry.cell_rect(1), (51, 0, 49, 50));
}

#[test]
fn plan_is_deterministic_for_a_seed() {
    let spec = spec(1080, 360, 14, 4);
    let loaded = all_loaded(49);

    let mut rng = rng_for_seed(Some(42));
    let a = compile_grid_plan(&spec, &loaded, &mut rng).unwrap();
    let mut rng = rng_for_seed(Some(42));
    let b = compile_grid_plan(&spec, &loaded, &mut rng).unwrap();
    assert_eq!(a.cells, b.cells);
}

#[test]
fn places_every_loaded_cover_once() {
    let spec = spec(1080, 360, 14, 4);
    let loaded = all_loaded(49);

    let mut rng = rng_for_seed(Some(7));
    let plan = compile_grid_plan(&spec, &loaded, &mut rng).unwrap();
    assert_eq!(plan.cells.len(), 56);
    assert_eq!(plan.cover_count(), 49);

    let mut seen = vec![0usize; 49];
    for slot in &plan.cells {
        if let CellSlot::Cover(src) = slot {
            seen[*src] += 1;
        }
    }
    assert!(seen.iter().all(|&n| n == 1));
}

#[test]
fn failed_loads_become_placeholders() {
    let spec = spec(1080, 360, 14, 4);
    let mut loaded = all_loaded(49);
    loaded[3] = None;
    loaded[17] = None;

    let mut rng = rng_for_seed(Some(7));
    let plan = compile_grid_plan(&spec, &loaded, &mut rng).unwrap();
    assert_eq!(plan.cover_count(), 47);
    assert!(!plan.cells.contains(&CellSlot::Cover(3)));
    assert!(!plan.cells.contains(&CellSlot::Cover(17)));
}

#[test]
fn extra_sources_are_capped_at_the_cell_count() {
    let spec = spec(100, 50, 2, 1);
    let loaded = all_loaded(10);

    let mut rng = rng_for_seed(Some(3));
    let plan = compile_grid_plan(&spec, &loaded, &mut rng).unwrap();
    assert_eq!(plan.cells.len(), 2);
    assert_eq!(plan.cover_count(), 2);
}

#[test]
fn duplicate_fill_avoids_identical_neighbors() {
    let mut spec = spec(1080, 360, 14, 4);
    spec.fill = FillMode::Duplicates;
    let loaded = all_loaded(49);

    for seed in 0..20 {
        let mut rng = rng_for_seed(Some(seed));
        let plan = compile_grid_plan(&spec, &loaded, &mut rng).unwrap();
        // All 56 cells end up with a cover; 49 covers leave 7 duplicates.
        assert_eq!(plan.cover_count(), 56);

        for (cell, slot) in plan.cells.iter().enumerate() {
            let CellSlot::Cover(src) = slot else { continue };
            let row = cell / 14;
            let col = cell % 14;
            for (r, c) in [
                (row.wrapping_sub(1), col),
                (row + 1, col),
                (row, col.wrapping_sub(1)),
                (row, col + 1),
            ] {
                if r >= 4 || c >= 14 {
                    continue;
                }
                let neighbor = r * 14 + c;
                if neighbor == cell {
                    continue;
                }
                assert_ne!(
                    plan.cells[neighbor],
                    CellSlot::Cover(*src),
                    "seed {seed}: identical covers touch at cells {cell} and {neighbor}"
                );
            }
        }
    }
}

#[test]
fn duplicate_fill_with_nothing_loaded_keeps_placeholders() {
    let mut spec = spec(100, 50, 2, 1);
    spec.fill = FillMode::Duplicates;
    let loaded: Vec<Option<()>> = vec![None, None];

    let mut rng = rng_for_seed(Some(1));
    let plan = compile_grid_plan(&spec, &loaded, &mut rng).unwrap();
    assert_eq!(plan.cover_count(), 0);
}
