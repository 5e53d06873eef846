//! Identicon generation: options, orchestration, and errors.

use std::fmt;

use rand::Rng as _;

use crate::color::Palette;
use crate::grid::Grid;
use crate::rng::SeededRng;

/// Options for one generation run.
///
/// Plain fields; start from `Default` and set what you need. Color overrides
/// are opaque strings carried through to the palette verbatim.
#[derive(Debug, Clone, Default)]
pub struct IdenticonOptions {
    /// Grid edge length in cells. Defaults to 8.
    pub size: Option<u32>,
    /// Cell edge length in output pixels. Defaults to 4.
    pub scale: Option<u32>,
    /// Seed string. `None` or an empty string substitutes a random
    /// 16-hex-digit seed, so callers wanting determinism must supply a
    /// non-empty seed.
    pub seed: Option<String>,
    /// Foreground color override.
    pub color: Option<String>,
    /// Background color override.
    pub bg_color: Option<String>,
    /// Spot color override.
    pub spot_color: Option<String>,
}

/// Default grid edge length in cells.
pub const DEFAULT_SIZE: u32 = 8;

/// Default cell edge length in output pixels.
pub const DEFAULT_SCALE: u32 = 4;

/// Generation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// Grid size was zero.
    InvalidDimension(u32),
    /// Pixel scale was zero.
    InvalidScale(u32),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension(size) => {
                write!(f, "invalid grid size: {size} (must be positive)")
            }
            Self::InvalidScale(scale) => {
                write!(f, "invalid pixel scale: {scale} (must be positive)")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// A generated identicon: the cell grid, its palette, and the pixel scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Identicon {
    grid: Grid,
    palette: Palette,
    scale: u32,
}

impl Identicon {
    /// Generate an identicon.
    ///
    /// Validates the options, resolves the seed, then performs the fixed
    /// draw sequence: foreground, background, and spot colors (skipping
    /// overridden slots), then the grid. The whole run owns one generator
    /// instance; repeated calls with the same non-empty seed and options
    /// produce identical results.
    pub fn generate(options: IdenticonOptions) -> Result<Self, GenerateError> {
        let size = options.size.unwrap_or(DEFAULT_SIZE);
        let scale = options.scale.unwrap_or(DEFAULT_SCALE);
        if size == 0 {
            return Err(GenerateError::InvalidDimension(size));
        }
        if scale == 0 {
            return Err(GenerateError::InvalidScale(scale));
        }

        let seed = match options.seed {
            Some(seed) if !seed.is_empty() => seed,
            _ => random_seed(),
        };

        let mut rng = SeededRng::new(&seed);
        let palette = Palette::resolve(
            &mut rng,
            options.color,
            options.bg_color,
            options.spot_color,
        );
        let grid = Grid::synthesize(&mut rng, size);

        Ok(Self {
            grid,
            palette,
            scale,
        })
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Cell edge length in output pixels.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Output image edge length in pixels: grid size times scale.
    #[must_use]
    pub fn output_dimension(&self) -> u32 {
        self.grid.size() * self.scale
    }
}

/// A random 16-hex-digit seed for runs that did not supply one.
fn random_seed() -> String {
    let value: u64 = rand::rng().random();
    format!("{value:016x}")
}
