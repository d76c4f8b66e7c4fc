//! Rotation axes and the quartet calculator.
//!
//! A 90 degree rotation of the cube about an axis rotates every section
//! perpendicular to that axis in its own plane. Each section is peeled into
//! concentric square rings (layers), and each ring of edge `N - 1 - 2 * layer`
//! is covered by that many quartets: four cells that trade places in a single
//! 4-cycle. Walking every section, layer and offset touches each moving cell
//! exactly once.
//!
//! Rotation convention (positive axes, right-handed):
//! - `+x`: `(x, y, z) -> (x, N-1-z, y)`
//! - `+y`: `(x, y, z) -> (z, y, N-1-x)`
//! - `+z`: `(x, y, z) -> (N-1-y, x, z)`
//!
//! Each negative axis is the inverse rotation.

use std::fmt;
use std::str::FromStr;

use crate::grid::{Coord, Dimension};

/// One of the six signed principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    XPositive,
    XNegative,
    YPositive,
    YNegative,
    ZPositive,
    ZNegative,
}

impl Axis {
    /// All six axes.
    pub const ALL: [Axis; 6] = [
        Axis::XPositive,
        Axis::XNegative,
        Axis::YPositive,
        Axis::YNegative,
        Axis::ZPositive,
        Axis::ZNegative,
    ];

    /// The axis whose rotation undoes this one.
    pub const fn inverse(self) -> Axis {
        match self {
            Axis::XPositive => Axis::XNegative,
            Axis::XNegative => Axis::XPositive,
            Axis::YPositive => Axis::YNegative,
            Axis::YNegative => Axis::YPositive,
            Axis::ZPositive => Axis::ZNegative,
            Axis::ZNegative => Axis::ZPositive,
        }
    }

    /// Returns where a single cell ends up after one 90 degree rotation.
    ///
    /// This is the cell-by-cell definition of the rotation; the quartets are a
    /// decomposition of it into disjoint 4-cycles.
    pub fn rotate_coord(self, coord: Coord, dimension: Dimension) -> Coord {
        let last = dimension.get() - 1;
        let Coord { x, y, z } = coord;
        match self {
            Axis::XPositive => Coord::new(x, last - z, y),
            Axis::XNegative => Coord::new(x, z, last - y),
            Axis::YPositive => Coord::new(z, y, last - x),
            Axis::YNegative => Coord::new(last - z, y, x),
            Axis::ZPositive => Coord::new(last - y, x, z),
            Axis::ZNegative => Coord::new(y, last - x, z),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::XPositive => "+x",
            Axis::XNegative => "-x",
            Axis::YPositive => "+y",
            Axis::YNegative => "-y",
            Axis::ZPositive => "+z",
            Axis::ZNegative => "-z",
        };
        f.write_str(name)
    }
}

/// Error returned when an axis name is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown axis {0:?} (expected one of x+, x-, y+, y-, z+, z-)")]
pub struct AxisParseError(String);

impl FromStr for Axis {
    type Err = AxisParseError;

    /// Accepts `x+`, `+x`, `px` and the matching negative forms
    /// (`x-`, `-x`, `nx`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let axis = match lower.as_str() {
            "x+" | "+x" | "px" => Axis::XPositive,
            "x-" | "-x" | "nx" => Axis::XNegative,
            "y+" | "+y" | "py" => Axis::YPositive,
            "y-" | "-y" | "ny" => Axis::YNegative,
            "z+" | "+z" | "pz" => Axis::ZPositive,
            "z-" | "-z" | "nz" => Axis::ZNegative,
            _ => return Err(AxisParseError(s.to_owned())),
        };
        Ok(axis)
    }
}

/// Error returned when a quartet is requested outside the traversal bounds.
///
/// The rotation loops never ask for these, so seeing one means the caller's
/// loop bounds are wrong.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuartetError {
    #[error("section {section} is outside a cube of dimension {dimension}")]
    SectionOutOfRange { section: usize, dimension: usize },
    #[error("layer {layer} is past the {ring_count} rings of a dimension {dimension} section")]
    LayerOutOfRange {
        layer: usize,
        ring_count: usize,
        dimension: usize,
    },
    #[error("offset {offset} is past the {ring_len} quartets of layer {layer}")]
    OffsetOutOfRange {
        offset: usize,
        ring_len: usize,
        layer: usize,
    },
}

/// Four cells forming one 4-cycle of a rotation.
///
/// The value at `cells[0]` moves to `cells[1]`, `cells[1]` to `cells[2]`,
/// `cells[2]` to `cells[3]` and `cells[3]` back to `cells[0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quartet {
    pub cells: [Coord; 4],
}

impl Quartet {
    /// Linear indices of the four cells, in cycle order.
    #[inline]
    pub fn indices(&self, dimension: Dimension) -> [usize; 4] {
        self.cells.map(|coord| dimension.encode(coord))
    }
}

/// Derives the quartet at (`section`, `layer`, `offset`) for a rotation about
/// `axis`.
///
/// `section` indexes the slices perpendicular to the axis, `layer` the rings
/// from the outside in and `offset` the position along the ring's top edge.
pub fn quartet(
    dimension: Dimension,
    section: usize,
    layer: usize,
    offset: usize,
    axis: Axis,
) -> Result<Quartet, QuartetError> {
    let n = dimension.get();
    if section >= n {
        return Err(QuartetError::SectionOutOfRange {
            section,
            dimension: n,
        });
    }
    if layer >= dimension.ring_count() {
        return Err(QuartetError::LayerOutOfRange {
            layer,
            ring_count: dimension.ring_count(),
            dimension: n,
        });
    }
    let ring_len = dimension.ring_len(layer);
    if offset >= ring_len {
        return Err(QuartetError::OffsetOutOfRange {
            offset,
            ring_len,
            layer,
        });
    }

    let s = section;
    // near and far edges of the ring, and the two positions walked along them
    let near = layer;
    let far = n - 1 - layer;
    let fwd = near + offset;
    let back = far - offset;

    let cells = match axis {
        // (y, z) plane, x fixed
        Axis::XPositive => [
            Coord::new(s, fwd, near),
            Coord::new(s, far, fwd),
            Coord::new(s, back, far),
            Coord::new(s, near, back),
        ],
        Axis::XNegative => [
            Coord::new(s, fwd, near),
            Coord::new(s, near, back),
            Coord::new(s, back, far),
            Coord::new(s, far, fwd),
        ],
        // (z, x) plane, y fixed
        Axis::YPositive => [
            Coord::new(near, s, fwd),
            Coord::new(fwd, s, far),
            Coord::new(far, s, back),
            Coord::new(back, s, near),
        ],
        Axis::YNegative => [
            Coord::new(near, s, fwd),
            Coord::new(back, s, near),
            Coord::new(far, s, back),
            Coord::new(fwd, s, far),
        ],
        // (x, y) plane, z fixed
        Axis::ZPositive => [
            Coord::new(fwd, near, s),
            Coord::new(far, fwd, s),
            Coord::new(back, far, s),
            Coord::new(near, back, s),
        ],
        Axis::ZNegative => [
            Coord::new(fwd, near, s),
            Coord::new(near, back, s),
            Coord::new(back, far, s),
            Coord::new(far, fwd, s),
        ],
    };

    Ok(Quartet { cells })
}

/// Iterates over every quartet of one full rotation about `axis`, in
/// section, layer, offset order.
pub fn quartets(
    dimension: Dimension,
    axis: Axis,
) -> impl Iterator<Item = Result<Quartet, QuartetError>> {
    (0..dimension.get()).flat_map(move |section| {
        (0..dimension.ring_count()).flat_map(move |layer| {
            (0..dimension.ring_len(layer))
                .map(move |offset| quartet(dimension, section, layer, offset, axis))
        })
    })
}
