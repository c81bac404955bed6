//! Map generation
//!
//! ```
//! use hex_pathmaps::{MapGenerator, MapShape};
//!
//! let mut gen = MapGenerator::new(Some(7));
//! let map = gen.generate(MapShape::Hexagonal, 1, 0.0).unwrap();
//! assert_eq!(map.to_string(), "[0, 0, 0, 0, -1, 0, 0]");
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::{MapError, Result};
use crate::hex_grid::{Hex, HexGrid};
use crate::map::{Cell, HexMap};

/// Shape of the generated map
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MapShape {
    Hexagonal,
    Square,
}

impl MapShape {
    /// Resolve the shape from command line switches
    ///
    /// Hexagonal wins when both are set, and is assumed when neither is.
    pub fn from_flags(hexagonal: bool, square: bool) -> Self {
        match (hexagonal, square) {
            (true, true) => {
                warn!("Both hexagonal and square maps requested, generating hexagonal");
                MapShape::Hexagonal
            }
            (false, true) => MapShape::Square,
            _ => MapShape::Hexagonal,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MapShape::Hexagonal => "hexagonal",
            MapShape::Square => "square",
        }
    }
}

/// Generator of random maps with walls and a single target
pub struct MapGenerator {
    random: StdRng,
}

impl MapGenerator {
    /// Seed the random source, from the clock if `seed` is not given
    pub fn new(seed: Option<u64>) -> Self {
        let state = seed.unwrap_or_else(time_seed);
        debug!("Random seed {}", state);
        Self {
            random: StdRng::seed_from_u64(state),
        }
    }

    /// Generate a map of given shape
    ///
    /// - `radius`: Rings around the start cell.
    /// - `ratio`: Share of the non-reserved cells that become walls.
    pub fn generate(&mut self, shape: MapShape, radius: u32, ratio: f64) -> Result<HexMap> {
        match shape {
            MapShape::Hexagonal => self.generate_hexagonal(radius, ratio),
            MapShape::Square => Err(MapError::UnsupportedShape(shape.name())),
        }
    }

    /// Generate hexagonal map
    ///
    /// The target is drawn from the sector `x > 0, y >= 0`; the remaining
    /// cells, apart from the origin, get exactly `⌊ratio · m⌋` walls where
    /// `m` is the number of such cells.
    pub fn generate_hexagonal(&mut self, radius: u32, ratio: f64) -> Result<HexMap> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(MapError::InvalidRatio(ratio));
        }
        let grid = HexGrid::new(radius.max(1));
        let target = sample_target(&grid, &mut self.random);

        let candidates = grid.cell_count() - 2;
        let mut fill = wall_fill(candidates, ratio);
        fill.shuffle(&mut self.random);
        debug!(
            "Radius {}, target ({}, {}), {} walls out of {} cells",
            grid.radius(),
            target.x,
            target.y,
            fill.iter().filter(|c| **c == Cell::Wall).count(),
            candidates
        );

        let mut cells = vec![Cell::Free; grid.cell_count()];
        let free_cells = grid
            .coords()
            .enumerate()
            .filter(|(_, hex)| !hex.is_origin() && *hex != target)
            .map(|(i, _)| i);
        for (i, cell) in free_cells.zip(fill) {
            cells[i] = cell;
        }
        if let Some(i) = grid.index_of(target) {
            cells[i] = Cell::Target;
        }
        HexMap::from_cells(cells)
    }
}

/// Unshuffled candidate codes: walls first, then free cells
fn wall_fill(candidates: usize, ratio: f64) -> Vec<Cell> {
    let walls = ((ratio * candidates as f64).floor() as usize).min(candidates);
    let mut fill = vec![Cell::Wall; walls];
    fill.resize(candidates, Cell::Free);
    fill
}

/// Draw target uniformly from the target sector
///
/// Picks ordinal `i` in `[1, k]` and returns the `i`th sector cell in
/// traversal order. The sector holds exactly `k` cells for `r >= 1`, so the
/// ordinal always indexes into it.
fn sample_target<R: Rng>(grid: &HexGrid, random: &mut R) -> Hex {
    let sector: Vec<Hex> = grid.coords().filter(Hex::in_target_sector).collect();
    let ordinal = random.gen_range(1..=sector.len());
    sector[ordinal - 1]
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
