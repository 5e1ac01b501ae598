use crate::bitmap;
use crate::font::FontSource;
use ab_glyph::{point, Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use heatpaint_core::{ArtError, IntensityGrid, GRID_HEIGHT, GRID_WIDTH};

/// First size tried by the fit search.
pub const INITIAL_FONT_SIZE: u32 = 1;

/// Upper bound for the fit search; text with no ink never overflows.
pub const MAX_FONT_SIZE: u32 = 64;

/// Ink extent of laid-out text, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub min_x: i32,
    pub min_y: i32,
    pub width: usize,
    pub height: usize,
}

impl TextBox {
    fn fits(&self) -> bool {
        self.height <= GRID_HEIGHT && self.width <= GRID_WIDTH
    }
}

/// Render `text` into a grid `min(text width, 100)` wide and exactly 7 tall.
pub fn render_text(text: &str, font: &FontSource) -> Result<IntensityGrid, ArtError> {
    if text.is_empty() {
        return Err(ArtError::invalid_argument("text must not be empty"));
    }
    match font {
        FontSource::Scalable { font, .. } => {
            let size = fit_font_size(font, text);
            tracing::debug!(size, "font size chosen");
            render_scalable(font, size, text)
        }
        FontSource::Fixed => render_fixed(text),
    }
}

/// Largest size whose ink box fits the grid: grow while it fits, back off one step on overflow.
pub fn fit_font_size(font: &FontVec, text: &str) -> u32 {
    let mut size = INITIAL_FONT_SIZE;
    loop {
        if !measure(font, size, text).fits() {
            size -= 1;
            break;
        }
        if size == MAX_FONT_SIZE {
            break;
        }
        size += 1;
    }
    size.max(1)
}

/// Ink box of `text` at `size` pixels.
pub fn measure(font: &FontVec, size: u32, text: &str) -> TextBox {
    ink_box(&layout(font, size, text))
}

fn layout(font: &FontVec, size: u32, text: &str) -> Vec<OutlinedGlyph> {
    let scale = PxScale::from(size as f32);
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut previous: Option<GlyphId> = None;
    let mut outlined = Vec::new();
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        previous = Some(id);
        if let Some(g) = font.outline_glyph(glyph) {
            outlined.push(g);
        }
    }
    outlined
}

/// Top-left pixel of a glyph's rasterization bounds.
fn glyph_origin(glyph: &OutlinedGlyph) -> (i32, i32) {
    let min = glyph.px_bounds().min;
    (min.x.floor() as i32, min.y.floor() as i32)
}

/// Gray level for a pixel with `coverage` in [0, 1]; 255 means no ink.
fn shade(coverage: f32) -> u8 {
    (f32::from(u8::MAX) * (1.0 - coverage.clamp(0.0, 1.0))).round() as u8
}

/// Box around the pixels that actually receive ink; tighter than the
/// rounded-out outline bounds.
fn ink_box(glyphs: &[OutlinedGlyph]) -> TextBox {
    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    for g in glyphs {
        let (ox, oy) = glyph_origin(g);
        g.draw(|x, y, coverage| {
            if shade(coverage) == u8::MAX {
                return;
            }
            let (px, py) = (ox + x as i32, oy + y as i32);
            bounds = Some(match bounds {
                None => (px, py, px, py),
                Some((x0, y0, x1, y1)) => (x0.min(px), y0.min(py), x1.max(px), y1.max(py)),
            });
        });
    }
    match bounds {
        Some((x0, y0, x1, y1)) => TextBox {
            min_x: x0,
            min_y: y0,
            width: (x1 - x0 + 1) as usize,
            height: (y1 - y0 + 1) as usize,
        },
        None => TextBox {
            min_x: 0,
            min_y: 0,
            width: 0,
            height: 0,
        },
    }
}

/// Offset that centers `inner` within `outer`, floored like integer division on negatives.
fn center(outer: usize, inner: usize) -> i32 {
    (outer as i32 - inner as i32).div_euclid(2)
}

/// White canvas of the right shape for text `text_width` pixels wide.
struct Canvas {
    width: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    fn for_text_width(text_width: usize) -> Self {
        let width = text_width.min(GRID_WIDTH);
        Self {
            width,
            pixels: vec![u8::MAX; width * GRID_HEIGHT],
        }
    }

    /// Darken (x, y) by `coverage` in [0, 1]; ink outside the canvas is clipped.
    fn ink(&mut self, x: i32, y: i32, coverage: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= GRID_HEIGHT {
            return;
        }
        let px = &mut self.pixels[y as usize * self.width + x as usize];
        *px = (*px).min(shade(coverage));
    }

    fn into_grid(self) -> Result<IntensityGrid, ArtError> {
        IntensityGrid::from_row_major(self.width, self.pixels)
    }
}

fn render_scalable(font: &FontVec, size: u32, text: &str) -> Result<IntensityGrid, ArtError> {
    let glyphs = layout(font, size, text);
    let bbox = ink_box(&glyphs);
    let mut canvas = Canvas::for_text_width(bbox.width);
    let dx = center(canvas.width, bbox.width) - bbox.min_x;
    let dy = center(GRID_HEIGHT, bbox.height) - bbox.min_y;
    for g in &glyphs {
        let (ox, oy) = glyph_origin(g);
        let (ox, oy) = (ox + dx, oy + dy);
        g.draw(|x, y, coverage| canvas.ink(ox + x as i32, oy + y as i32, coverage));
    }
    canvas.into_grid()
}

fn render_fixed(text: &str) -> Result<IntensityGrid, ArtError> {
    let text_width = bitmap::text_width(text);
    let mut canvas = Canvas::for_text_width(text_width);
    let dx = center(canvas.width, text_width);
    let dy = center(GRID_HEIGHT, bitmap::GLYPH_HEIGHT);
    let advance = bitmap::GLYPH_WIDTH + bitmap::GLYPH_SPACING;
    for (i, ch) in text.chars().enumerate() {
        let left = dx + (i * advance) as i32;
        for col in 0..bitmap::GLYPH_WIDTH {
            for row in 0..bitmap::GLYPH_HEIGHT {
                if bitmap::is_set(ch, col, row) {
                    canvas.ink(left + col as i32, dy + row as i32, 1.0);
                }
            }
        }
    }
    canvas.into_grid()
}
