//! Small hexagonal maps for pathfinding, and annotation of their first steps
//!
//! Maps are hexagons of radius `r` around the start cell `(0, 0)`. One cell
//! in the sector `x > 0, y >= 0` is the target, a share of the others are
//! walls. On the wire a map is a flat list of cell codes (`0` free, `1` wall,
//! `-1` target) in [hex_grid] traversal order.
//!
//! Maps are generated by `MapGenerator`, behind the `mapgen` feature (on by
//! default).
//!
//! # Examples
//! ## Annotate a map
//! ```
//! use hex_pathmaps::{locate_target, parse_endpoint, render, AnnotationRecord, HexMap};
//!
//! let map: HexMap = "[1,0,0,0,-1,0,1]".parse().unwrap();
//! print!("{}", render(&map));
//!
//! let target = locate_target(&map).unwrap();
//! let endpoint = parse_endpoint("", target).unwrap();
//! let record = AnnotationRecord::new(&map, endpoint).unwrap();
//! assert_eq!(record.to_string(), "1 0 0 0 -1 0 1 0 0 0 0 1 0 0");
//! ```

pub mod annotation;
pub mod cli;
pub mod error;
pub mod hex_grid;
pub mod map;
#[cfg(feature = "mapgen")]
pub mod map_generator;
pub mod render;

pub use annotation::{occupancy, parse_endpoint, AnnotationRecord};
pub use error::{MapError, Result};
pub use hex_grid::{Hex, HexGrid};
pub use map::{Cell, HexMap};
#[cfg(feature = "mapgen")]
pub use map_generator::{MapGenerator, MapShape};
pub use render::{legend, locate_target, render};
