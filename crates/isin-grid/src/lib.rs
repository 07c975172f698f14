//! Integerized sinusoidal equal-area bin grid.
//!
//! Satellite Level-3 products accumulate observations into a global grid of
//! near-equal-area cells ("bins"). The globe is cut into latitude rows of
//! constant angular height, and each row is cut into a row-specific number of
//! longitude bins proportional to the cosine of the row's center latitude, so
//! cells keep roughly the same surface area from equator to pole. Bin
//! identifiers are 1-based, increase from south to north across rows and from
//! west to east within a row.
//!
//! The crate provides the two inverse lookups over that grid:
//!
//! ```text
//! (lat, lon) ──► BinGrid::to_bin   ──► bin id
//! bin id     ──► BinGrid::from_bin ──► centroid (lat, lon)
//! ```
//!
//! plus region queries (all bins inside a bounding box, or within a
//! great-circle radius of a point) built on the same table. The table is
//! constructed once and immutable afterwards; every lookup is a pure function
//! of the table and its inputs, so a [`BinGrid`] can be shared by reference
//! across threads without synchronization.
//!
//! # Example
//!
//! ```
//! use isin_grid::BinGrid;
//!
//! let grid = BinGrid::build(4320).unwrap();
//! let bin = grid.to_bin(-78.3, -162.0);
//! let (lat, lon) = grid.from_bin(bin);
//! assert_eq!(grid.to_bin(lat, lon), bin);
//! ```

pub mod bbox;
pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod region;

pub use bbox::BoundingBox;
pub use config::GridConfig;
pub use coord::{clamp_lat, great_circle_km, wrap_lon, EARTH_RADIUS_KM};
pub use error::{GridError, Result};
pub use grid::{resolutions, BinGrid};
