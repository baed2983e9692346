use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{BinderyError, BinderyResult};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Full description of one collage run.
///
/// A spec is a pure data model: it can be deserialized from JSON (see
/// [`CollageSpec::from_path`]) or built from the builtin catalog
/// ([`CollageSpec::frith_hilton_banner`]). Rendering a spec is performed by
/// [`crate::render_collage`].
pub struct CollageSpec {
    /// Output canvas width in pixels.
    pub width: u32,
    /// Output canvas height in pixels.
    pub height: u32,
    /// Grid column count.
    pub cols: u32,
    /// Grid row count.
    pub rows: u32,
    /// Gap between cells in pixels.
    #[serde(default = "default_gap_px")]
    pub gap_px: f64,
    /// Canvas background color as straight RGB8.
    #[serde(default = "default_background_rgb8")]
    pub background_rgb8: [u8; 3],
    /// Fill color for cells without a cover.
    #[serde(default = "default_placeholder_rgb8")]
    pub placeholder_rgb8: [u8; 3],
    /// How leftover and failed cells are filled.
    #[serde(default)]
    pub fill: FillMode,
    /// Shuffle seed; entropy-seeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Cover sources in catalog order: `http(s)://` URLs or filesystem paths.
    pub sources: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Fill policy for grid cells left without a cover after placement.
pub enum FillMode {
    /// Leave the placeholder fill.
    #[default]
    Placeholder,
    /// Reuse randomly chosen loaded covers, avoiding identical neighbors.
    Duplicates,
}

fn default_gap_px() -> f64 {
    2.0
}

fn default_background_rgb8() -> [u8; 3] {
    [255, 255, 255]
}

/// `#f8f9fa`, the placeholder fill of the original banner.
fn default_placeholder_rgb8() -> [u8; 3] {
    [0xf8, 0xf9, 0xfa]
}

impl CollageSpec {
    /// Read and validate a spec from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> BinderyResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read collage spec '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Parse and validate a spec from JSON text.
    pub fn from_json(text: &str) -> BinderyResult<Self> {
        let spec: Self = serde_json::from_str(text)
            .map_err(|e| BinderyError::serde(format!("parse collage spec: {e}")))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Check that the spec describes a renderable grid.
    pub fn validate(&self) -> BinderyResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BinderyError::validation("canvas dimensions must be > 0"));
        }
        if self.cols == 0 || self.rows == 0 {
            return Err(BinderyError::validation("grid must have cols > 0 and rows > 0"));
        }
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return Err(BinderyError::validation("gap_px must be finite and >= 0"));
        }
        let gaps_w = (f64::from(self.cols) - 1.0) * self.gap_px;
        let gaps_h = (f64::from(self.rows) - 1.0) * self.gap_px;
        if gaps_w >= f64::from(self.width) || gaps_h >= f64::from(self.height) {
            return Err(BinderyError::validation(
                "gaps leave no room for cells; reduce gap_px or the grid size",
            ));
        }
        Ok(())
    }

    /// Total number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collage/model.rs"]
mod tests;
