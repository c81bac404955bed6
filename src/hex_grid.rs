//! Coordinates and traversal order of a hexagon shaped grid
//!
//! Cells are addressed by `(x, y)` with the third cube coordinate implied,
//! `z = -x - y`. A cell belongs to a grid of radius `r` when none of the
//! three coordinates exceeds `r` in absolute value.
//!
//! The traversal order visits rows `y = -r..=r` and, within a row, columns
//! `x = -r..=r`, skipping cells off the hexagon. Flat sequences of cell codes
//! are laid out in this order.

use crate::error::{MapError, Result};

/// Location of a single hex cell
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Hex {
    pub x: i32,
    pub y: i32,
}

impl Hex {
    /// Start cell of every map
    pub const ORIGIN: Hex = Hex { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Implied third cube coordinate
    pub const fn z(&self) -> i32 {
        -self.x - self.y
    }

    /// Number of steps from the origin
    pub fn distance(&self) -> u32 {
        self.x
            .unsigned_abs()
            .max(self.y.unsigned_abs())
            .max(self.z().unsigned_abs())
    }

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    /// Whether the cell lies in the sector where targets are placed
    ///
    /// The sector is `x > 0 && y >= 0`, one sixth of the hexagon.
    pub fn in_target_sector(&self) -> bool {
        self.x > 0 && self.y >= 0
    }
}

/// Hexagon shaped grid of a given radius
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct HexGrid {
    radius: u32,
}

impl HexGrid {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }

    /// Recover the grid from the length of a flat sequence
    pub fn for_cell_count(n: usize) -> Result<Self> {
        radius_for_cell_count(n).map(Self::new)
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    fn r(&self) -> i32 {
        self.radius as i32
    }

    /// Total number of cells, `3r² + 3r + 1`
    pub fn cell_count(&self) -> usize {
        cell_count(self.radius)
    }

    /// Number of cells in the target sector, `(r² + r) / 2`
    pub fn sector_size(&self) -> usize {
        let r = self.radius as usize;
        (r * r + r) / 2
    }

    pub fn contains(&self, hex: Hex) -> bool {
        hex.distance() <= self.radius
    }

    /// Inclusive column range of row `y`
    fn row_bounds(&self, y: i32) -> (i32, i32) {
        let r = self.r();
        ((-r).max(-r - y), r.min(r - y))
    }

    fn row_len(&self, y: i32) -> usize {
        let (lo, hi) = self.row_bounds(y);
        (hi - lo + 1) as usize
    }

    /// All cells in traversal order
    pub fn coords(&self) -> impl Iterator<Item = Hex> + '_ {
        let r = self.r();
        (-r..=r).flat_map(move |y| {
            let (lo, hi) = self.row_bounds(y);
            (lo..=hi).map(move |x| Hex { x, y })
        })
    }

    /// Position of `hex` in the traversal order
    pub fn index_of(&self, hex: Hex) -> Option<usize> {
        if !self.contains(hex) {
            return None;
        }
        let preceding: usize = (-self.r()..hex.y).map(|y| self.row_len(y)).sum();
        let (lo, _) = self.row_bounds(hex.y);
        Some(preceding + (hex.x - lo) as usize)
    }

    /// Cell at position `index` of the traversal order
    pub fn hex_at(&self, index: usize) -> Option<Hex> {
        let mut remaining = index;
        for y in -self.r()..=self.r() {
            let len = self.row_len(y);
            if remaining < len {
                let (lo, _) = self.row_bounds(y);
                return Some(Hex {
                    x: lo + remaining as i32,
                    y,
                });
            }
            remaining -= len;
        }
        None
    }
}

/// Number of cells in a grid of radius `r`
pub fn cell_count(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Invert [cell_count], `r = (-3 + sqrt(9 - 12(1 - n))) / 6`
///
/// Returns error if `n` is not the cell count of a grid with radius of at
/// least one.
pub fn radius_for_cell_count(n: usize) -> Result<u32> {
    if n < cell_count(1) {
        return Err(MapError::InvalidCellCount(n));
    }
    let discriminant = 12.0 * n as f64 - 3.0;
    let radius = ((discriminant.sqrt() - 3.0) / 6.0).round() as u32;
    if cell_count(radius) == n {
        Ok(radius)
    } else {
        Err(MapError::InvalidCellCount(n))
    }
}
