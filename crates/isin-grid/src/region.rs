//! Region-of-interest queries: bins inside a bounding box, or within a
//! great-circle radius of a central coordinate.

use crate::bbox::BoundingBox;
use crate::coord::{clamp_lat, great_circle_km, wrap_lon, EARTH_RADIUS_KM};
use crate::grid::BinGrid;

impl BinGrid {
    /// Identifiers of all bins whose centroid lies inside the box.
    ///
    /// Rows are selected by center latitude and columns by center longitude;
    /// boxes with `min_lon > max_lon` wrap across the antimeridian. Ids are
    /// returned in ascending order.
    pub fn bins_in_bbox(&self, bbox: &BoundingBox) -> Vec<u64> {
        let min_lat = clamp_lat(bbox.min_lat);
        let max_lat = clamp_lat(bbox.max_lat);
        let mut bins = Vec::new();
        if min_lat > max_lat {
            return bins;
        }

        let min_lon = normalize_edge(bbox.min_lon);
        let max_lon = normalize_edge(bbox.max_lon);

        for row in self.row_of(min_lat)..=self.row_of(max_lat) {
            let lat = self.center_latitude(row);
            if lat < min_lat || lat > max_lat {
                continue;
            }
            self.collect_row_span(row, min_lon, max_lon, &mut bins);
        }
        bins
    }

    /// Identifiers of all bins whose centroid lies within `radius_km` of the
    /// given coordinate, measured along a great circle on the
    /// [`EARTH_RADIUS_KM`] sphere. Ids are returned in ascending order.
    ///
    /// Per row, candidate columns come from the widest longitude offset that
    /// can still fall inside the angular radius (spherical law of cosines);
    /// each candidate centroid is then distance-checked exactly.
    pub fn bins_within_radius(&self, lat: f64, lon: f64, radius_km: f64) -> Vec<u64> {
        let mut bins = Vec::new();
        if radius_km < 0.0 {
            return bins;
        }

        let center_lat = clamp_lat(lat);
        let center_lon = wrap_lon(lon);
        let sigma = radius_km / EARTH_RADIUS_KM;
        let dlat_deg = sigma.to_degrees();
        let (sin0, cos0) = center_lat.to_radians().sin_cos();

        let mut candidates = Vec::new();
        for row in self.row_of(center_lat - dlat_deg)..=self.row_of(center_lat + dlat_deg) {
            let (sin_r, cos_r) = self.center_latitude(row).to_radians().sin_cos();
            let cos_limit = (sigma.cos() - sin0 * sin_r) / (cos0 * cos_r);
            // Small pad so centroids sitting exactly on the limit stay in the
            // candidate set; the distance check below is the arbiter.
            let dlon_deg = cos_limit.clamp(-1.0, 1.0).acos().to_degrees() + 1e-9;

            candidates.clear();
            if dlon_deg >= 180.0 {
                self.collect_row_span(row, -180.0, 180.0, &mut candidates);
            } else {
                let west = wrap_lon(center_lon - dlon_deg);
                let east = wrap_lon(center_lon + dlon_deg);
                self.collect_row_span(row, west, east, &mut candidates);
            }

            for &bin in &candidates {
                let (bin_lat, bin_lon) = self.from_bin(bin);
                if great_circle_km(center_lat, center_lon, bin_lat, bin_lon) <= radius_km {
                    bins.push(bin);
                }
            }
        }
        bins
    }

    /// Append ids of bins in `row` whose center longitude lies in
    /// `[lon_min, lon_max]`, wrapping across the antimeridian when
    /// `lon_min > lon_max`.
    fn collect_row_span(&self, row: usize, lon_min: f64, lon_max: f64, out: &mut Vec<u64>) {
        let bins = self.bins_in_row(row) as i64;
        let base = self.base_bin(row);

        // Center of column c is 360 * (c + 0.5) / bins - 180.
        let first_col = |lon: f64| ((lon + 180.0) / 360.0 * bins as f64 - 0.5).ceil() as i64;
        let last_col = |lon: f64| ((lon + 180.0) / 360.0 * bins as f64 - 0.5).floor() as i64;
        let push_range = |out: &mut Vec<u64>, first: i64, last: i64| {
            for col in first.max(0)..=last.min(bins - 1) {
                out.push(base + col as u64);
            }
        };

        if lon_min <= lon_max {
            push_range(out, first_col(lon_min), last_col(lon_max));
        } else {
            push_range(out, 0, last_col(lon_max));
            push_range(out, first_col(lon_min), bins - 1);
        }
    }
}

/// Normalize a bounding-box edge longitude. Values already in the closed
/// interval [-180, 180] are kept as written so that -180 and 180 remain
/// distinct edges; anything else is wrapped.
fn normalize_edge(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        wrap_lon(lon)
    }
}
