//! Errors raised while building, decoding and annotating maps

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Input error. Should start with '['.")]
    MissingOpenBracket,

    #[error("Input error. Should end with ']'.")]
    MissingCloseBracket,

    #[error("Input error. Should separate elements by ',' (element {position}: `{token}`).")]
    MissingSeparator { position: usize, token: String },

    #[error("Input error. Unexpected cell code `{token}` at element {position}.")]
    InvalidCode { position: usize, token: String },

    #[error("Input error. Should separate endpoint coordinates with ','.")]
    MissingEndpointSeparator,

    #[error("Input error. Endpoint coordinate `{0}` is not an integer.")]
    InvalidEndpoint(String),

    #[error("Input error. Endpoint ({x}, {y}) lies outside a grid of radius {radius}.")]
    EndpointOffGrid { x: i32, y: i32, radius: u32 },

    #[error("{0} cells do not form a hexagonal grid")]
    InvalidCellCount(usize),

    #[error("Expected exactly one target cell, found {0}")]
    TargetCount(usize),

    #[error("{0} maps are not yet supported")]
    UnsupportedShape(&'static str),

    #[error("Wall ratio {0} is outside [0, 1]")]
    InvalidRatio(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MapError {
    /// Malformed input from the user, as opposed to an inconsistent map
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingOpenBracket
                | Self::MissingCloseBracket
                | Self::MissingSeparator { .. }
                | Self::InvalidCode { .. }
                | Self::MissingEndpointSeparator
                | Self::InvalidEndpoint(_)
                | Self::EndpointOffGrid { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
