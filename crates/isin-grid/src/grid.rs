//! The equal-area bin grid table and its forward/inverse lookups.

use rayon::prelude::*;

use crate::config::GridConfig;
use crate::coord::{clamp_lat, wrap_lon};
use crate::error::{GridError, Result};

/// Precomputed row table for an integerized sinusoidal equal-area grid.
///
/// Rows are indexed `0..num_rows` from south to north. Each row holds
/// `bins_in_row[row]` longitude bins, proportional to the cosine of the row's
/// center latitude, so cells keep an approximately constant surface area from
/// equator to pole. Bin identifiers are 1-based and contiguous:
/// `base_bin[row]` is the id of the westernmost bin of a row, and the ids
/// `1..=total_bins` partition the globe with no gaps or overlaps.
///
/// The table is immutable after construction and every lookup takes `&self`,
/// so a grid can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct BinGrid {
    num_rows: usize,
    /// Center latitude per row, degrees. Stored in double precision: a
    /// single-precision latitude table shifts bin boundaries at fine row
    /// resolutions.
    center_lat: Vec<f64>,
    bins_in_row: Vec<u64>,
    base_bin: Vec<u64>,
    total_bins: u64,
}

impl BinGrid {
    /// Build the row table for the given number of latitude rows.
    ///
    /// Standard Level-3 products use 2160, 4320, 8640 or 17280 rows; see
    /// [`resolutions`] for named constructors. A zero row count is an
    /// [`InvalidConfiguration`](GridError::InvalidConfiguration) error.
    pub fn build(num_rows: usize) -> Result<Self> {
        if num_rows == 0 {
            return Err(GridError::invalid_configuration(
                "row count must be at least 1",
            ));
        }
        Ok(Self::new(num_rows))
    }

    /// Build a grid from a validated configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate().map_err(GridError::invalid_configuration)?;
        Self::build(config.num_rows)
    }

    fn new(num_rows: usize) -> Self {
        let mut center_lat = Vec::with_capacity(num_rows);
        let mut bins_in_row = Vec::with_capacity(num_rows);
        let mut base_bin = Vec::with_capacity(num_rows);

        let mut next_base: u64 = 1;
        for row in 0..num_rows {
            let lat = (row as f64 + 0.5) * 180.0 / num_rows as f64 - 90.0;
            // Round half up, the rounding convention the Level-3 binners use.
            let bins = ((2.0 * num_rows as f64 * lat.to_radians().cos() + 0.5) as u64).max(1);

            center_lat.push(lat);
            bins_in_row.push(bins);
            base_bin.push(next_base);
            next_base += bins;
        }

        let total_bins = next_base - 1;
        tracing::debug!(num_rows, total_bins, "built bin grid");

        Self {
            num_rows,
            center_lat,
            bins_in_row,
            base_bin,
            total_bins,
        }
    }

    /// Number of latitude rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Largest valid bin identifier. Identifiers run from 1 to this value.
    pub fn total_bins(&self) -> u64 {
        self.total_bins
    }

    /// Center latitude of a row, degrees.
    pub fn center_latitude(&self, row: usize) -> f64 {
        self.center_lat[row]
    }

    /// Number of longitude bins in a row.
    pub fn bins_in_row(&self, row: usize) -> u64 {
        self.bins_in_row[row]
    }

    /// First bin identifier of a row.
    pub fn base_bin(&self, row: usize) -> u64 {
        self.base_bin[row]
    }

    /// Row index containing the given latitude.
    ///
    /// Out-of-range latitudes land in the nearest row rather than indexing
    /// out of bounds; exactly 90°N maps into the final row.
    pub fn row_of(&self, lat: f64) -> usize {
        let row = ((lat + 90.0) * self.num_rows as f64 / 180.0).floor();
        (row.max(0.0) as usize).min(self.num_rows - 1)
    }

    /// Row containing a bin identifier, by binary search over the monotonic
    /// base-bin table. Identifiers past the end resolve to the final row.
    pub fn row_for_bin(&self, bin: u64) -> usize {
        let bin = bin.max(1);
        self.base_bin.partition_point(|&base| base <= bin) - 1
    }

    /// Map a coordinate to its bin identifier.
    ///
    /// Latitude is clamped to [-90, 90] and longitude wrapped to (-180, 180]
    /// first: noisy inputs are normalized rather than rejected, so large
    /// batches survive the occasional malformed coordinate. The result is
    /// always in `1..=total_bins`.
    pub fn to_bin(&self, lat: f64, lon: f64) -> u64 {
        let lat = clamp_lat(lat);
        let lon = wrap_lon(lon);

        let row = self.row_of(lat);
        let bins = self.bins_in_row[row];
        let col = (((lon + 180.0) * bins as f64 / 360.0) as u64).min(bins - 1);
        self.base_bin[row] + col
    }

    /// Map a bin identifier to the coordinate of its cell centroid.
    ///
    /// Identifiers below 1 are treated as 1 and identifiers beyond
    /// [`total_bins`](Self::total_bins) resolve into the final row; malformed
    /// ids yield a nearby valid centroid instead of failing.
    pub fn from_bin(&self, bin: u64) -> (f64, f64) {
        let bin = bin.max(1);
        let row = self.row_for_bin(bin);

        let lat = self.center_lat[row];
        let offset = (bin - self.base_bin[row]).min(self.bins_in_row[row] - 1);
        let lon = 360.0 * (offset as f64 + 0.5) / self.bins_in_row[row] as f64 - 180.0;
        (lat, lon)
    }

    /// Bin identifiers for a batch of `(lat, lon)` pairs.
    ///
    /// Output order matches input order. Elements are independent, so the
    /// batch is mapped in parallel.
    pub fn to_bin_batch(&self, coords: &[(f64, f64)]) -> Vec<u64> {
        coords
            .par_iter()
            .map(|&(lat, lon)| self.to_bin(lat, lon))
            .collect()
    }

    /// Cell centroids for a batch of bin identifiers, in input order.
    pub fn from_bin_batch(&self, bins: &[u64]) -> Vec<(f64, f64)> {
        bins.par_iter().map(|&bin| self.from_bin(bin)).collect()
    }
}

/// Named constructors for the standard Level-3 grid resolutions.
pub mod resolutions {
    use super::BinGrid;

    /// 9.2 km grid (2160 rows), the original SeaWiFS binning resolution.
    pub fn nine_km() -> BinGrid {
        BinGrid::new(2160)
    }

    /// 4.6 km grid (4320 rows), used by MODIS and VIIRS products.
    pub fn four_km() -> BinGrid {
        BinGrid::new(4320)
    }

    /// 2.3 km grid (8640 rows).
    pub fn two_km() -> BinGrid {
        BinGrid::new(8640)
    }

    /// 1.1 km grid (17280 rows).
    pub fn one_km() -> BinGrid {
        BinGrid::new(17280)
    }
}
