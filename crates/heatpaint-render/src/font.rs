use ab_glyph::FontVec;
use std::path::{Path, PathBuf};

/// Places a scalable font is looked for when none is configured.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "arial.ttf",
];

/// A font able to draw text.
pub enum FontSource {
    Scalable { font: FontVec, path: PathBuf },
    /// The built-in 5x7 glyph set.
    Fixed,
}

impl FontSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Scalable { path, .. } => path.display().to_string(),
            Self::Fixed => "built-in 5x7".to_string(),
        }
    }
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FontSource({})", self.describe())
    }
}

/// Ordered list of font files to try before settling on the fixed glyph set.
#[derive(Debug, Clone, Default)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
}

impl FontResolver {
    /// No scalable candidates; always resolves to [`FontSource::Fixed`].
    pub fn fixed_only() -> Self {
        Self::default()
    }

    /// An explicit font (if any) followed by the usual system locations.
    pub fn with_system_fonts(preferred: Option<&Path>) -> Self {
        let mut candidates: Vec<PathBuf> = preferred.map(Path::to_path_buf).into_iter().collect();
        candidates.extend(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));
        Self { candidates }
    }

    pub fn from_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that loads as a font, else the fixed glyph set.
    pub fn resolve(&self) -> FontSource {
        for path in &self.candidates {
            match load(path) {
                Ok(font) => {
                    tracing::info!(font = %path.display(), "using scalable font");
                    return FontSource::Scalable {
                        font,
                        path: path.clone(),
                    };
                }
                Err(reason) => {
                    tracing::debug!(font = %path.display(), %reason, "font unavailable");
                }
            }
        }
        tracing::info!("no scalable font found, using built-in 5x7 glyphs");
        FontSource::Fixed
    }
}

fn load(path: &Path) -> Result<FontVec, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    FontVec::try_from_vec(bytes).map_err(|e| e.to_string())
}
