//! Symmetric pixel grid synthesis.

use crate::rng::SeededRng;

/// One grid cell.
///
/// Cells are drawn as `floor(draw × 2.3)`, giving roughly 43% background,
/// 43% foreground, and 13% spot. Any drawn value other than 0 or 1 collapses
/// to `Spot`; there is no clamp, so a theoretical out-of-range draw still
/// maps to the same cell the renderer would paint for 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Background,
    Foreground,
    Spot,
}

impl Cell {
    fn draw(rng: &mut SeededRng) -> Self {
        match (rng.next() * 2.3).floor() as i64 {
            0 => Self::Background,
            1 => Self::Foreground,
            _ => Self::Spot,
        }
    }
}

/// A square, left-right mirror-symmetric cell grid.
///
/// Stored row-major as a flat sequence of `size * size` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Synthesize a grid, consuming `size * ceil(size / 2)` draws.
    ///
    /// Each row draws `ceil(size / 2)` cells left to right, then mirrors the
    /// first `size - ceil(size / 2)` of them, reversed, onto the row tail.
    /// Mirroring reuses drawn values and consumes no further draws. For odd
    /// sizes the middle column is drawn, not mirrored.
    #[must_use]
    pub fn synthesize(rng: &mut SeededRng, size: u32) -> Self {
        let size = size as usize;
        let data_width = size.div_ceil(2);
        let mirror_width = size - data_width;

        let mut cells = Vec::with_capacity(size * size);
        for _row in 0..size {
            let row_start = cells.len();
            for _col in 0..data_width {
                cells.push(Cell::draw(rng));
            }
            for offset in (0..mirror_width).rev() {
                let mirrored = cells[row_start + offset];
                cells.push(mirrored);
            }
        }

        Self {
            size: size as u32,
            cells,
        }
    }

    /// Grid edge length in cells.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Cell at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    #[must_use]
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        assert!(row < self.size && col < self.size, "cell out of bounds");
        self.cells[(row * self.size + col) as usize]
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
