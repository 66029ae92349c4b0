//! Boustrophedon scan-path generation over a field boundary.
//!
//! Produces the waypoint sequence a monitoring or spraying flight steps
//! through: parallel scan lines across the boundary's bounding box,
//! alternating direction each line, restricted to samples that fall inside
//! the ring. Output order is traversal order and must not be re-sorted by
//! consumers.

use crate::geometry::PolygonRing;
use serde::{Deserialize, Serialize};

/// Default sampling increment in degrees (~3.3 m of latitude).
const DEFAULT_STEP_DEG: f64 = 0.00003;
/// Adjacent scan lines sit three sampling steps apart.
const LINE_SPACING_FACTOR: f64 = 3.0;

/// Sampling parameters for scan-path generation, in polygon coordinate units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Sampling resolution along a scan line.
    pub step: f64,
    /// Distance between parallel scan lines.
    pub line_spacing: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::with_step(DEFAULT_STEP_DEG)
    }
}

impl ScanConfig {
    /// Derive a config from a sampling step, keeping the standard 3x line spacing.
    pub fn with_step(step: f64) -> Self {
        Self {
            step,
            line_spacing: step * LINE_SPACING_FACTOR,
        }
    }
}

/// Generate a back-and-forth scan path covering the ring.
///
/// Scan lines run at constant latitude, starting one `line_spacing` above
/// the southern edge of the bounding box and stopping one `line_spacing`
/// below the northern edge. Odd lines sample west to east, even lines east
/// to west, each starting and stopping one `step` inside the box. Samples
/// outside the ring are dropped.
///
/// A ring too small to produce any interior sample falls back to its own
/// vertex sequence, so any ring with at least one vertex yields a non-empty
/// path. The ring is not validated here; callers must reject malformed
/// boundaries before planning.
///
/// Runtime grows with bounding-box area over `step` squared, each sample
/// costing a containment test; fine for interactive field sizes, slow for
/// very large boundaries or very small steps.
pub fn plan_scan_path(ring: &PolygonRing, config: &ScanConfig) -> Vec<[f64; 2]> {
    let Some(bbox) = ring.bounding_box() else {
        return Vec::new();
    };

    let step = config.step;
    let line_spacing = config.line_spacing;

    let mut path = Vec::new();
    let mut lat = bbox.min_lat + line_spacing;
    let mut going_east = true;

    while lat <= bbox.max_lat - line_spacing {
        if going_east {
            let mut lon = bbox.min_lon + step;
            while lon <= bbox.max_lon - step {
                if ring.contains(lat, lon) {
                    path.push([lat, lon]);
                }
                lon += step;
            }
        } else {
            let mut lon = bbox.max_lon - step;
            while lon >= bbox.min_lon + step {
                if ring.contains(lat, lon) {
                    path.push([lat, lon]);
                }
                lon -= step;
            }
        }
        lat += line_spacing;
        going_east = !going_east;
    }

    if path.is_empty() {
        return ring.vertices().to_vec();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> PolygonRing {
        PolygonRing::new(vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]])
    }

    fn coarse_config() -> ScanConfig {
        ScanConfig {
            step: 1.0,
            line_spacing: 3.0,
        }
    }

    #[test]
    fn path_is_deterministic() {
        let ring = unit_square();
        let config = ScanConfig::default();
        let first = plan_scan_path(&ring, &config);
        let second = plan_scan_path(&ring, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn every_primary_waypoint_is_inside_the_ring() {
        let ring = unit_square();
        let path = plan_scan_path(&ring, &coarse_config());
        assert!(!path.is_empty());
        for point in &path {
            assert!(
                ring.contains(point[0], point[1]),
                "waypoint {point:?} escaped the ring"
            );
        }
    }

    #[test]
    fn waypoints_respect_the_bounding_box() {
        let ring = PolygonRing::new(vec![[0.0, 0.0], [0.0, 10.0], [7.0, 13.0], [10.0, 3.0]]);
        let bbox = ring.bounding_box().unwrap();
        let path = plan_scan_path(&ring, &coarse_config());
        assert!(!path.is_empty());
        for point in &path {
            assert!(point[0] >= bbox.min_lat && point[0] <= bbox.max_lat);
            assert!(point[1] >= bbox.min_lon && point[1] <= bbox.max_lon);
        }
    }

    #[test]
    fn consecutive_scan_lines_alternate_direction() {
        // Square spanning lat 0..10 with step 1 and spacing 3 yields lines
        // at lat 3 and lat 6, nine samples each, all inside.
        let path = plan_scan_path(&unit_square(), &coarse_config());
        assert_eq!(path.len(), 18);

        let (first, second) = path.split_at(9);
        assert!(first.iter().all(|p| p[0] == 3.0));
        assert!(second.iter().all(|p| p[0] == 6.0));

        for pair in first.windows(2) {
            assert!(pair[0][1] < pair[1][1], "first line should run west to east");
        }
        for pair in second.windows(2) {
            assert!(pair[0][1] > pair[1][1], "second line should run east to west");
        }
    }

    #[test]
    fn tiny_ring_falls_back_to_its_vertices() {
        // A triangle smaller than one sampling step; the primary scan finds
        // nothing, so the path degrades to the open vertex ring.
        let closed = vec![[0.0, 0.0], [0.0, 0.4], [0.4, 0.2], [0.0, 0.0]];
        let ring = PolygonRing::new(closed.clone());
        let path = plan_scan_path(&ring, &coarse_config());
        assert_eq!(path, closed[..closed.len() - 1].to_vec());
    }

    #[test]
    fn single_vertex_ring_still_yields_a_path() {
        let ring = PolygonRing::new(vec![[50.0, 30.0]]);
        let path = plan_scan_path(&ring, &ScanConfig::default());
        assert_eq!(path, vec![[50.0, 30.0]]);
    }

    #[test]
    fn empty_ring_yields_empty_path() {
        let ring = PolygonRing::new(Vec::new());
        assert!(plan_scan_path(&ring, &ScanConfig::default()).is_empty());
    }

    #[test]
    fn default_step_covers_a_field_sized_ring() {
        // Roughly 100m x 100m field near Kyiv at the default step size.
        let ring = PolygonRing::new(vec![
            [50.2440, 30.1220],
            [50.2440, 30.1234],
            [50.2449, 30.1234],
            [50.2449, 30.1220],
        ]);
        let path = plan_scan_path(&ring, &ScanConfig::default());
        assert!(path.len() > 100, "expected dense coverage, got {}", path.len());
        for point in &path {
            assert!(ring.contains(point[0], point[1]));
        }
    }
}
