//! Fixed-format textual traces of the coordinate codec and volume contents.
//!
//! These are the non-interactive outputs of the `dump` and `rotate`
//! commands, and stable enough to snapshot in tests.

use crate::grid::Dimension;
use crate::volume::Volume;

/// Indices of every coordinate, visited z, then y, then x, joined by commas.
pub fn index_table(dimension: Dimension) -> String {
    let indices: Vec<String> = dimension
        .coords()
        .map(|coord| dimension.encode(coord).to_string())
        .collect();
    indices.join(",")
}

/// Decoded coordinates in index order, one `x,y,z` line each.
pub fn coordinate_table(dimension: Dimension) -> String {
    (0..dimension.cell_count())
        .filter_map(|cell_index| dimension.decode(cell_index))
        .map(|coord| format!("{coord}\n"))
        .collect()
}

/// Every z-slice of the volume, separated by a blank line.
pub fn elements(volume: &Volume) -> String {
    let mut output = String::new();
    for z in 0..volume.dimension().get() {
        if z > 0 {
            output.push('\n');
        }
        output.push_str(&volume.view(z).to_string());
    }
    output
}

/// The full `dump` report: index table, coordinate table and elements.
pub fn report(volume: &Volume) -> String {
    let dimension = volume.dimension();
    format!(
        "Coordinate to index:\n{}\n\nIndex to coordinate:\n{}\nElements:\n{}",
        index_table(dimension),
        coordinate_table(dimension),
        elements(volume)
    )
}
