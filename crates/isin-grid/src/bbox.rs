//! Geographic bounding boxes for region queries.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in degrees.
///
/// `min_lon` may exceed `max_lon`, in which case the box crosses the
/// antimeridian and covers the two arcs `[min_lon, 180]` and
/// `[-180, max_lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Whole-globe box.
    pub fn global() -> Self {
        Self::new(-180.0, -90.0, 180.0, 90.0)
    }

    /// Check whether the box wraps across the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// Check if a point is contained within this box, honoring antimeridian
    /// wrap.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        if lat < self.min_lat || lat > self.max_lat {
            return false;
        }
        if self.crosses_antimeridian() {
            lon >= self.min_lon || lon <= self.max_lon
        } else {
            lon >= self.min_lon && lon <= self.max_lon
        }
    }

    /// Longitudinal extent in degrees.
    pub fn width(&self) -> f64 {
        if self.crosses_antimeridian() {
            360.0 - (self.min_lon - self.max_lon)
        } else {
            self.max_lon - self.min_lon
        }
    }

    /// Latitudinal extent in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::global()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_plain() {
        let bbox = BoundingBox::new(-10.0, -5.0, 20.0, 15.0);
        assert!(bbox.contains(0.0, 0.0));
        assert!(bbox.contains(-5.0, -10.0));
        assert!(bbox.contains(15.0, 20.0));
        assert!(!bbox.contains(16.0, 0.0));
        assert!(!bbox.contains(0.0, 21.0));
    }

    #[test]
    fn test_contains_across_antimeridian() {
        let bbox = BoundingBox::new(170.0, -20.0, -170.0, 20.0);
        assert!(bbox.crosses_antimeridian());
        assert!(bbox.contains(0.0, 175.0));
        assert!(bbox.contains(0.0, -175.0));
        assert!(bbox.contains(0.0, 180.0));
        assert!(!bbox.contains(0.0, 0.0));
        assert!(!bbox.contains(25.0, 175.0));
    }

    #[test]
    fn test_width_and_height() {
        let plain = BoundingBox::new(-10.0, -5.0, 20.0, 15.0);
        assert_eq!(plain.width(), 30.0);
        assert_eq!(plain.height(), 20.0);

        let wrapped = BoundingBox::new(170.0, -20.0, -170.0, 20.0);
        assert_eq!(wrapped.width(), 20.0);

        assert_eq!(BoundingBox::global().width(), 360.0);
    }

    #[test]
    fn test_bbox_json_roundtrip() {
        let bbox = BoundingBox::new(-125.0, 24.0, -66.0, 50.0);
        let json = serde_json::to_string(&bbox).unwrap();
        let back: BoundingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bbox);
    }
}
