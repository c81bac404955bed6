//! Cell codes and the flat sequence encoding of a map

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{MapError, Result};
use crate::hex_grid::{Hex, HexGrid};

/// State of one cell, with its numeric wire code
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    Free,
    Wall,
    Target,
}

impl Cell {
    pub const fn code(self) -> i8 {
        match self {
            Cell::Free => 0,
            Cell::Wall => 1,
            Cell::Target => -1,
        }
    }

    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Cell::Free),
            1 => Some(Cell::Wall),
            -1 => Some(Cell::Target),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Hexagonal map stored as a flat sequence in traversal order
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct HexMap {
    grid: HexGrid,
    cells: Vec<Cell>,
}

impl HexMap {
    /// Wrap cells laid out in traversal order
    ///
    /// Returns error, if the number of cells is not a hexagonal cell count.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self> {
        let grid = HexGrid::for_cell_count(cells.len())?;
        Ok(Self { grid, cells })
    }

    pub fn grid(&self) -> HexGrid {
        self.grid
    }

    pub fn radius(&self) -> u32 {
        self.grid.radius()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, hex: Hex) -> Option<Cell> {
        self.grid.index_of(hex).map(|i| self.cells[i])
    }

    /// Cells paired with their coordinates, in traversal order
    pub fn iter(&self) -> impl Iterator<Item = (Hex, Cell)> + '_ {
        self.grid.coords().zip(self.cells.iter().copied())
    }

    /// Numeric codes in traversal order
    pub fn codes(&self) -> impl Iterator<Item = i8> + '_ {
        self.cells.iter().map(|c| c.code())
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }
}

/// Bracketed, comma separated list: `[0, 1, -1, ...]`
impl fmt::Display for HexMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.codes().join(", "))
    }
}

/// Parse the literal form `[c0,c1,...]`
///
/// Whitespace around the brackets and elements is ignored.
impl FromStr for HexMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        let body = s
            .trim()
            .strip_prefix('[')
            .ok_or(MapError::MissingOpenBracket)?
            .strip_suffix(']')
            .ok_or(MapError::MissingCloseBracket)?;

        let cells = body
            .split(',')
            .enumerate()
            .map(|(position, token)| parse_cell(position, token.trim()))
            .collect::<Result<Vec<_>>>()?;

        Self::from_cells(cells)
    }
}

fn parse_cell(position: usize, token: &str) -> Result<Cell> {
    if token.contains(char::is_whitespace) {
        return Err(MapError::MissingSeparator {
            position,
            token: token.to_string(),
        });
    }
    token
        .parse::<i64>()
        .ok()
        .and_then(Cell::from_code)
        .ok_or_else(|| MapError::InvalidCode {
            position,
            token: token.to_string(),
        })
}
