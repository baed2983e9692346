use image::{Rgba, RgbaImage, imageops};

use crate::{
    assets::decode::PreparedImage,
    assets::fetch::fetch_covers,
    collage::model::CollageSpec,
    collage::plan::{CellSlot, GridGeometry, GridPlan, compile_grid_plan, rng_for_seed},
    foundation::error::{BinderyError, BinderyResult},
};

/// Resize filter used when scaling covers into cells.
const CELL_FILTER: imageops::FilterType = imageops::FilterType::Lanczos3;

/// Fetch, plan, and render a collage spec into an RGBA canvas.
#[tracing::instrument(skip(spec), fields(sources = spec.sources.len()))]
pub fn render_collage(spec: &CollageSpec) -> BinderyResult<RgbaImage> {
    let geometry = GridGeometry::for_spec(spec)?;
    let loaded = fetch_covers(&spec.sources);
    let mut rng = rng_for_seed(spec.seed);
    let plan = compile_grid_plan(spec, &loaded, &mut rng)?;
    render_grid_plan(&plan, &geometry, spec, &loaded)
}

/// Render a compiled plan: background fill, then per-cell cover or placeholder.
pub fn render_grid_plan(
    plan: &GridPlan,
    geometry: &GridGeometry,
    spec: &CollageSpec,
    loaded: &[Option<PreparedImage>],
) -> BinderyResult<RgbaImage> {
    if plan.cells.len() != geometry.cell_count() {
        return Err(BinderyError::validation(format!(
            "grid plan has {} cells, geometry expects {}",
            plan.cells.len(),
            geometry.cell_count()
        )));
    }

    let mut canvas = RgbaImage::from_pixel(spec.width, spec.height, opaque(spec.background_rgb8));

    for (index, slot) in plan.cells.iter().enumerate() {
        let (x, y, w, h) = geometry.cell_rect(index);
        match slot {
            CellSlot::Placeholder => {
                fill_rect(&mut canvas, x, y, w, h, opaque(spec.placeholder_rgb8));
            }
            CellSlot::Cover(src) => {
                let cover = loaded.get(*src).and_then(Option::as_ref).ok_or_else(|| {
                    BinderyError::validation(format!(
                        "grid plan references cover {src} which is not loaded"
                    ))
                })?;
                let scaled = imageops::resize(cover.rgba8.as_ref(), w, h, CELL_FILTER);
                imageops::overlay(&mut canvas, &scaled, i64::from(x), i64::from(y));
            }
        }
    }

    Ok(canvas)
}

fn opaque([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x1 = (x + w).min(canvas.width());
    let y1 = (y + h).min(canvas.height());
    for py in y..y1 {
        for px in x..x1 {
            canvas.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collage/render.rs"]
mod tests;
