use crate::error::ArtError;

/// Columns in a contribution heatmap year (one per week, rounded up).
pub const GRID_WIDTH: usize = 100;

/// Rows in a contribution heatmap (one per weekday).
pub const GRID_HEIGHT: usize = 7;

/// Grayscale samples laid out as a heatmap: columns are weeks, rows are weekdays.
///
/// Height is always [`GRID_HEIGHT`]; width is at most [`GRID_WIDTH`].
/// Samples are stored row-major, the same layout image buffers use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: usize,
    pixels: Vec<u8>,
}

impl IntensityGrid {
    /// Build a grid from a row-major buffer of `width * GRID_HEIGHT` samples.
    pub fn from_row_major(width: usize, pixels: Vec<u8>) -> Result<Self, ArtError> {
        if width > GRID_WIDTH {
            return Err(ArtError::InvalidGrid(format!(
                "width {width} exceeds {GRID_WIDTH}"
            )));
        }
        let expected = width * GRID_HEIGHT;
        if pixels.len() != expected {
            return Err(ArtError::InvalidGrid(format!(
                "expected {expected} samples for width {width}, got {}",
                pixels.len()
            )));
        }
        Ok(Self { width, pixels })
    }

    /// Build a grid by sampling `f(x, y)` for every cell.
    pub fn from_fn(width: usize, mut f: impl FnMut(usize, usize) -> u8) -> Result<Self, ArtError> {
        let mut pixels = Vec::with_capacity(width * GRID_HEIGHT);
        for y in 0..GRID_HEIGHT {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::from_row_major(width, pixels)
    }

    /// A grid where every cell is pure white.
    pub fn blank(width: usize) -> Result<Self, ArtError> {
        Self::from_fn(width, |_, _| u8::MAX)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Sample at column `x`, row `y`. Panics when out of bounds, like slice indexing.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(
            x < self.width && y < GRID_HEIGHT,
            "cell ({x}, {y}) outside {}x{GRID_HEIGHT} grid",
            self.width
        );
        self.pixels[y * self.width + x]
    }

    /// Cells in column-major order: every row of column 0, then column 1, ...
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        (0..self.width)
            .flat_map(move |x| (0..GRID_HEIGHT).map(move |y| (x, y, self.get(x, y))))
    }

    /// Row-major sample buffer.
    pub fn as_row_major(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_buffer_length() {
        let err = IntensityGrid::from_row_major(2, vec![0; 13]).unwrap_err();
        assert!(matches!(err, ArtError::InvalidGrid(_)));
    }

    #[test]
    fn rejects_width_over_limit() {
        let err = IntensityGrid::blank(GRID_WIDTH + 1).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn cells_are_column_major() {
        let grid = IntensityGrid::from_fn(2, |x, y| (x * 10 + y) as u8).unwrap();
        let order: Vec<(usize, usize)> = grid.cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(order.len(), 14);
        assert_eq!(&order[..8], &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 0)]);
        assert_eq!(grid.get(1, 3), 13);
        assert!(grid.cells().all(|(x, y, v)| v as usize == x * 10 + y));
    }

    #[test]
    fn zero_width_grid_has_no_cells() {
        let grid = IntensityGrid::blank(0).unwrap();
        assert_eq!(grid.height(), GRID_HEIGHT);
        assert_eq!(grid.cells().count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn get_out_of_bounds_panics() {
        let grid = IntensityGrid::blank(3).unwrap();
        grid.get(3, 0);
    }
}
