//! Textual layout of a hexagonal map

use crate::error::{MapError, Result};
use crate::hex_grid::Hex;
use crate::map::{Cell, HexMap};

const S_START: char = 'S';
const S_TARGET: char = 'T';

/// Legend of the coordinate system around the origin
pub fn legend() -> &'static str {
    "Coordinate system: (x, y)\n\
     \n\
     \x20  (0,-1) (1,-1)\n\
     \x20(-1,0) (0,0) (1, 0)\n\
     \x20  (-1,1)  (0,1)\n"
}

/// Render map rows with hexagonal indentation
///
/// Rows `y <= 0` pad off-grid columns with a single space, rows `y > 0` are
/// indented by `y` spaces. Each cell is written as a space and its glyph.
pub fn render(map: &HexMap) -> String {
    let r = map.radius() as i32;
    let mut cells = map.iter().peekable();
    let mut out = String::new();

    for y in -r..=r {
        if y > 0 {
            out.extend(std::iter::repeat(' ').take(y as usize));
        }
        for x in -r..=r {
            if let Some((hex, cell)) = cells.next_if(|(hex, _)| *hex == Hex::new(x, y)) {
                out.push(' ');
                push_glyph(&mut out, hex, cell);
            } else if y <= 0 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

fn push_glyph(out: &mut String, hex: Hex, cell: Cell) {
    if hex.is_origin() {
        out.push(S_START);
    } else if cell == Cell::Target {
        out.push(S_TARGET);
    } else {
        out.push_str(&cell.to_string());
    }
}

/// Find the only target cell
///
/// Returns error, if the map has zero or several targets.
pub fn locate_target(map: &HexMap) -> Result<Hex> {
    let targets: Vec<Hex> = map
        .iter()
        .filter(|(_, cell)| *cell == Cell::Target)
        .map(|(hex, _)| hex)
        .collect();
    match targets.as_slice() {
        [target] => Ok(*target),
        _ => Err(MapError::TargetCount(targets.len())),
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MapError;
    use crate::hex_grid::Hex;
    use crate::map::HexMap;
    use crate::render::{locate_target, render};

    #[test]
    fn render_radius_one() {
        let map: HexMap = "[1,0,0,0,-1,0,1]".parse().unwrap();
        assert_eq!(render(&map), "  1 0\n 0 S T\n  0 1\n");
    }

    #[test]
    fn render_radius_two() {
        let map: HexMap = "[0,0,0,0,0,0,0,0,0,0,-1,0,0,0,0,0,0,0,0]".parse().unwrap();
        let expected = "   0 0 0\n  0 0 0 0\n 0 0 S T 0\n  0 0 0 0\n   0 0 0\n";
        assert_eq!(render(&map), expected);
    }

    #[test]
    fn start_drawn_over_any_code() {
        let map: HexMap = "[0,0,0,1,-1,0,0]".parse().unwrap();
        assert_eq!(render(&map).lines().nth(1), Some(" 0 S T"));
    }

    #[test]
    fn locate_single_target() {
        let map: HexMap = "[0,1,0,0,0,0,-1]".parse().unwrap();
        assert_eq!(locate_target(&map).unwrap(), Hex::new(0, 1));
    }

    #[test]
    fn reject_missing_or_duplicate_target() {
        let none: HexMap = "[0,0,0,0,0,0,0]".parse().unwrap();
        assert!(matches!(locate_target(&none), Err(MapError::TargetCount(0))));

        let two: HexMap = "[-1,0,0,0,-1,0,0]".parse().unwrap();
        assert!(matches!(locate_target(&two), Err(MapError::TargetCount(2))));
    }
}
