//! The cubic volume and the in-place rotation engine.

use std::fmt;

use crate::geometry::{quartets, Axis, QuartetError};
use crate::grid::{Coord, Dimension};

/// Characters used for the default fill, cycled by cell index.
///
/// 64 symbols, so every cell of a 4x4x4 volume is distinct.
pub const FILL_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@#";

/// Error returned when building a volume from an existing buffer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VolumeError {
    #[error("a volume of dimension {dimension} needs {expected} cells, got {actual}")]
    CellCount {
        dimension: usize,
        expected: usize,
        actual: usize,
    },
}

/// A cube of `N^3` cells stored as a flat buffer (see [`crate::grid`] for the
/// index layout).
///
/// The buffer length always equals `dimension.cell_count()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume<T = u8> {
    dimension: Dimension,
    cells: Vec<T>,
}

impl Volume<u8> {
    /// Creates a volume with the default fill: cell `i` holds
    /// `FILL_ALPHABET[i % 64]`.
    pub fn new(dimension: Dimension) -> Self {
        Self::from_fn(dimension, |idx, _| FILL_ALPHABET[idx % FILL_ALPHABET.len()])
    }

    /// Borrows z-slice `section` for display.
    ///
    /// Panics if `section` is outside the volume.
    pub fn view(&self, section: usize) -> SectionView<'_> {
        assert!(
            section < self.dimension.get(),
            "section {section} is outside a cube of dimension {}",
            self.dimension
        );
        SectionView {
            volume: self,
            section,
        }
    }
}

impl<T> Volume<T> {
    /// Creates a volume whose cells are produced by `fill(index, coord)`.
    pub fn from_fn(dimension: Dimension, mut fill: impl FnMut(usize, Coord) -> T) -> Self {
        let cells = dimension
            .coords()
            .enumerate()
            .map(|(idx, coord)| fill(idx, coord))
            .collect();
        Self { dimension, cells }
    }

    /// Wraps an existing buffer, which must hold exactly `N^3` cells.
    pub fn from_cells(dimension: Dimension, cells: Vec<T>) -> Result<Self, VolumeError> {
        if cells.len() != dimension.cell_count() {
            return Err(VolumeError::CellCount {
                dimension: dimension.get(),
                expected: dimension.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { dimension, cells })
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Returns the cell at `coord`.
    pub fn get(&self, coord: Coord) -> &T {
        &self.cells[self.dimension.encode(coord)]
    }

    /// Returns the contiguous run of `N^2` cells with `z == section`.
    pub fn section(&self, section: usize) -> &[T] {
        let len = self.dimension.section_len();
        &self.cells[section * len..(section + 1) * len]
    }
}

impl<T: Copy> Volume<T> {
    /// Rotates the whole volume 90 degrees about `axis`, in place.
    ///
    /// Every quartet is staged in a local copy before any write, since its
    /// four cells alias the data being permuted. Only a quartet outside the
    /// traversal bounds can fail, and the traversal never produces one.
    pub fn rotate(&mut self, axis: Axis) -> Result<(), QuartetError> {
        let dimension = self.dimension;
        for quartet in quartets(dimension, axis) {
            let [a, b, c, d] = quartet?.indices(dimension);
            let staged = [self.cells[a], self.cells[b], self.cells[c], self.cells[d]];
            self.cells[b] = staged[0];
            self.cells[c] = staged[1];
            self.cells[d] = staged[2];
            self.cells[a] = staged[3];
        }
        log::debug!("rotated dimension {dimension} volume about {axis}");
        Ok(())
    }
}

/// One z-slice of a byte volume, rendered as `N` rows of `N` characters.
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'a> {
    volume: &'a Volume<u8>,
    section: usize,
}

impl<'a> SectionView<'a> {
    /// Index of the displayed z-slice.
    pub fn section(&self) -> usize {
        self.section
    }

    pub fn dimension(&self) -> Dimension {
        self.volume.dimension
    }

    /// Rows of the slice, top (`y == 0`) first.
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> {
        self.volume
            .section(self.section)
            .chunks(self.volume.dimension.get())
    }
}

impl fmt::Display for SectionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", char::from(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
