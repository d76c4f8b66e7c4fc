//! In-place 90 degree rotations of a cubic volume.
//!
//! A volume of dimension `N` is a flat buffer of `N^3` cells. It can be
//! rotated a quarter turn about any of the six signed principal axes without
//! allocating a second buffer: each planar section is split into concentric
//! rings, and each ring into 4-cycles of cells ("quartets") that are permuted
//! in place.
//!
//! - [`grid`]: dimensions and the coordinate <-> index codec
//! - [`geometry`]: axes and the quartet calculator
//! - [`volume`]: the volume buffer and rotation engine
//! - [`controller`]: the interactive session loop
//! - [`diagnostics`]: fixed-format textual traces

pub mod controller;
pub mod diagnostics;
pub mod geometry;
pub mod grid;
pub mod volume;

pub use controller::{Command, Session, SessionError, SessionState, Terminal};
pub use geometry::{quartet, quartets, Axis, Quartet, QuartetError};
pub use grid::{Coord, Dimension, DimensionError};
pub use volume::{SectionView, Volume, VolumeError};
