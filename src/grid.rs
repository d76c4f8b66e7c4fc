//! Cube dimensions and the coordinate codec.
//!
//! A volume of dimension `N` is stored as a flat buffer of `N^3` cells.
//! Index order is z-major with x fastest: `idx = x + y * N + z * N * N`,
//! so each z-slice occupies a contiguous run of `N * N` cells.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Smallest supported cube dimension.
pub const MIN_DIMENSION: usize = 3;
/// Largest supported cube dimension.
pub const MAX_DIMENSION: usize = 50;

/// Error returned when a cube dimension cannot be accepted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("dimension must be a positive integer ({0})")]
    NotANumber(#[from] ParseIntError),
    #[error("dimension must be between {MIN_DIMENSION} and {MAX_DIMENSION}, got {0}")]
    OutOfRange(usize),
}

/// Edge length of a cubic volume, validated to lie in
/// `MIN_DIMENSION..=MAX_DIMENSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension(usize);

impl Dimension {
    /// Validates an edge length.
    pub fn new(edge: usize) -> Result<Self, DimensionError> {
        if (MIN_DIMENSION..=MAX_DIMENSION).contains(&edge) {
            Ok(Self(edge))
        } else {
            Err(DimensionError::OutOfRange(edge))
        }
    }

    /// Edge length `N`.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of cells in one planar section (`N^2`).
    #[inline(always)]
    pub const fn section_len(self) -> usize {
        self.0 * self.0
    }

    /// Number of cells in the whole volume (`N^3`).
    #[inline(always)]
    pub const fn cell_count(self) -> usize {
        self.0 * self.0 * self.0
    }

    /// Number of concentric rings a section is split into when rotating.
    ///
    /// For odd `N` the centre cell is left over; it lies on the rotation axis
    /// and never moves.
    #[inline(always)]
    pub const fn ring_count(self) -> usize {
        self.0 / 2
    }

    /// Number of quartets on ring `layer`, which is also the edge length of
    /// that ring minus one. Zero for any layer at or past `ring_count`.
    #[inline(always)]
    pub const fn ring_len(self, layer: usize) -> usize {
        self.0.saturating_sub(1 + 2 * layer)
    }

    /// Converts a coordinate to its linear cell index.
    ///
    /// Panics if any component lies outside `0..N`: callers derive their
    /// coordinates from loop bounds, so a stray value is a broken invariant.
    #[inline(always)]
    pub fn encode(self, coord: Coord) -> usize {
        let n = self.0;
        assert!(
            coord.x < n && coord.y < n && coord.z < n,
            "coordinate {coord} is outside a cube of dimension {n}"
        );
        coord.x + coord.y * n + coord.z * n * n
    }

    /// Converts a linear cell index back to a coordinate.
    ///
    /// Returns `None` if the index is past the end of the volume.
    #[inline(always)]
    pub fn decode(self, cell_index: usize) -> Option<Coord> {
        if cell_index >= self.cell_count() {
            return None;
        }
        let n = self.0;
        Some(Coord {
            x: cell_index % n,
            y: (cell_index / n) % n,
            z: cell_index / (n * n),
        })
    }

    /// Iterates over every coordinate in index order (x fastest, z slowest).
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        let n = self.0;
        (0..n).flat_map(move |z| (0..n).flat_map(move |y| (0..n).map(move |x| Coord { x, y, z })))
    }
}

impl FromStr for Dimension {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().parse()?)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell position inside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}
