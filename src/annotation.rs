//! Human annotated first steps, persisted as append-only records

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use log::debug;

use crate::error::{MapError, Result};
use crate::hex_grid::{Hex, HexGrid};
use crate::map::HexMap;

/// Parse path endpoint as `x, y`
///
/// An empty or blank line selects `default`.
pub fn parse_endpoint(line: &str, default: Hex) -> Result<Hex> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(default);
    }
    let (x, y) = line
        .split_once(',')
        .ok_or(MapError::MissingEndpointSeparator)?;
    Ok(Hex::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(token: &str) -> Result<i32> {
    let token = token.trim();
    token
        .parse()
        .map_err(|_| MapError::InvalidEndpoint(token.to_string()))
}

/// One-hot occupancy of `grid`, marking `endpoint`
///
/// An endpoint outside the grid matches no cell and yields all zeros.
pub fn occupancy(grid: &HexGrid, endpoint: Hex) -> Vec<u8> {
    grid.coords().map(|hex| u8::from(hex == endpoint)).collect()
}

/// Original map with the chosen endpoint
#[derive(Debug)]
pub struct AnnotationRecord<'a> {
    map: &'a HexMap,
    endpoint: Hex,
}

impl<'a> AnnotationRecord<'a> {
    /// Returns error, if `endpoint` lies outside the map.
    pub fn new(map: &'a HexMap, endpoint: Hex) -> Result<Self> {
        if !map.grid().contains(endpoint) {
            return Err(MapError::EndpointOffGrid {
                x: endpoint.x,
                y: endpoint.y,
                radius: map.radius(),
            });
        }
        Ok(Self { map, endpoint })
    }

    pub fn endpoint(&self) -> Hex {
        self.endpoint
    }

    pub fn occupancy(&self) -> Vec<u8> {
        occupancy(&self.map.grid(), self.endpoint)
    }

    /// Append the record as a single line to `path`, creating the file
    pub fn append_to(&self, path: &Path) -> Result<()> {
        let line = format!("{}\n", self);
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())?;
        debug!(
            "Appended annotation ({}, {}) to {}",
            self.endpoint.x,
            self.endpoint.y,
            path.display()
        );
        Ok(())
    }
}

/// Space separated map codes followed by the occupancy codes
impl fmt::Display for AnnotationRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.map.codes().join(" "),
            self.occupancy().iter().join(" ")
        )
    }
}
