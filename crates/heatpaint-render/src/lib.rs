pub mod bitmap;
pub mod font;
pub mod image_grid;
pub mod input;
pub mod text;

pub use font::{FontResolver, FontSource};
pub use input::{InputKind, PatternInput};

use heatpaint_core::{ArtError, IntensityGrid};

/// Turns a [`PatternInput`] into an [`IntensityGrid`].
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    fonts: FontResolver,
}

impl Rasterizer {
    pub fn new(fonts: FontResolver) -> Self {
        Self { fonts }
    }

    pub fn rasterize(&self, input: &PatternInput) -> Result<IntensityGrid, ArtError> {
        let grid = match input {
            PatternInput::Text(text) => text::render_text(text, &self.fonts.resolve())?,
            PatternInput::Image(path) => image_grid::render_image(path)?,
        };
        tracing::info!(
            kind = %input.kind(),
            width = grid.width(),
            height = grid.height(),
            "pattern rasterized"
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatpaint_core::GRID_HEIGHT;

    #[test]
    fn text_without_fonts_uses_fixed_glyphs() {
        let r = Rasterizer::new(FontResolver::fixed_only());
        let grid = r.rasterize(&PatternInput::Text("HI".into())).unwrap();
        assert_eq!(grid.height(), GRID_HEIGHT);
        assert!(grid.width() <= 100);
    }

    #[test]
    fn missing_image_fails() {
        let r = Rasterizer::default();
        let err = r
            .rasterize(&PatternInput::Image("/nonexistent/pattern.png".into()))
            .unwrap_err();
        assert!(matches!(err, ArtError::Input { .. }));
    }
}
