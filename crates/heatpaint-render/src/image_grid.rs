use heatpaint_core::{ArtError, IntensityGrid, GRID_HEIGHT, GRID_WIDTH};
use image::imageops::{self, FilterType};
use std::path::Path;

/// Decode `path`, convert to luminance, and resample to exactly 100x7 with Lanczos.
pub fn render_image(path: &Path) -> Result<IntensityGrid, ArtError> {
    let img = image::open(path).map_err(|e| ArtError::input(path, e))?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "image decoded"
    );
    let gray = img.to_luma8();
    let resized = imageops::resize(
        &gray,
        GRID_WIDTH as u32,
        GRID_HEIGHT as u32,
        FilterType::Lanczos3,
    );
    IntensityGrid::from_row_major(GRID_WIDTH, resized.into_raw())
}
