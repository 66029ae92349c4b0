//! Field boundary geometry.
//!
//! Polygon rings are stored as `[lat, lon]` vertex pairs and every query in
//! this module takes coordinates in the same order. Callers deserializing
//! GeoJSON-style `[lon, lat]` data must swap before constructing a ring.

use serde::{Deserialize, Serialize};

/// Tolerance for treating two vertices as coincident when normalizing rings.
const CLOSE_EPS: f64 = 1e-9;

/// Axis-aligned bounding box over ring vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// An open polygon ring: ordered `[lat, lon]` vertices with the closing edge
/// implied between the last and first vertex.
///
/// Map-drawing tools are inconsistent about whether they repeat the first
/// vertex at the end of a ring. The constructor accepts both forms and
/// normalizes to the open representation, so the rest of the crate never has
/// to care which one it was handed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PolygonRing(Vec<[f64; 2]>);

// Deserialization goes through `new` so a ring from the wire or the
// database carries the same open-ring invariant as a constructed one.
impl<'de> Deserialize<'de> for PolygonRing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vertices = Vec::<[f64; 2]>::deserialize(deserializer)?;
        Ok(PolygonRing::new(vertices))
    }
}

impl PolygonRing {
    pub fn new(mut vertices: Vec<[f64; 2]>) -> Self {
        if vertices.len() >= 2 {
            let first = vertices[0];
            let last = vertices[vertices.len() - 1];
            if (first[0] - last[0]).abs() < CLOSE_EPS && (first[1] - last[1]).abs() < CLOSE_EPS {
                vertices.pop();
            }
        }
        Self(vertices)
    }

    pub fn vertices(&self) -> &[[f64; 2]] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if a point is inside the ring.
    /// Uses the even-odd ray casting algorithm.
    ///
    /// Points exactly on an edge or vertex get an arbitrary but stable
    /// answer. Rings with fewer than 3 vertices contain nothing.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let n = self.0.len();
        if n < 3 {
            return false;
        }

        // Count crossings of a ray cast eastward from the query point.
        // Horizontal edges never satisfy the strict straddle test, so the
        // interpolation below cannot divide by zero.
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let yi = self.0[i][0];
            let xi = self.0[i][1];
            let yj = self.0[j][0];
            let xj = self.0[j][1];

            if ((yi > lat) != (yj > lat)) && (lon < (xj - xi) * (lat - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    /// Bounding box over all vertices, or `None` for an empty ring.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.0.first()?;
        let mut bbox = BoundingBox {
            min_lat: first[0],
            max_lat: first[0],
            min_lon: first[1],
            max_lon: first[1],
        };
        for vertex in &self.0[1..] {
            bbox.min_lat = bbox.min_lat.min(vertex[0]);
            bbox.max_lat = bbox.max_lat.max(vertex[0]);
            bbox.min_lon = bbox.min_lon.min(vertex[1]);
            bbox.max_lon = bbox.max_lon.max(vertex[1]);
        }
        Some(bbox)
    }

    /// Planar area of the ring in hectares.
    ///
    /// Vertices are projected to local meters around the ring's mean
    /// latitude before applying the shoelace formula; accurate enough for
    /// field-sized polygons, not for continental ones.
    pub fn area_ha(&self) -> f64 {
        let n = self.0.len();
        if n < 3 {
            return 0.0;
        }

        let mean_lat = self.0.iter().map(|v| v[0]).sum::<f64>() / n as f64;
        let meters_lat = crate::spatial::meters_per_deg_lat(mean_lat);
        let meters_lon = crate::spatial::meters_per_deg_lon(mean_lat);

        let mut doubled = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            let xi = self.0[i][1] * meters_lon;
            let yi = self.0[i][0] * meters_lat;
            let xj = self.0[j][1] * meters_lon;
            let yj = self.0[j][0] * meters_lat;
            doubled += xi * yj - xj * yi;
        }

        (doubled.abs() / 2.0) / 10_000.0
    }

    /// Validate a ring for use as a mission boundary.
    /// Returns list of validation errors (empty = valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.0.len() < 3 {
            errors.push("Polygon must have at least 3 vertices".to_string());
        }

        for (idx, vertex) in self.0.iter().enumerate() {
            if !vertex[0].is_finite() || !vertex[1].is_finite() {
                errors.push(format!("Vertex {} has non-finite coordinates", idx));
                continue;
            }
            if vertex[0] < -90.0 || vertex[0] > 90.0 {
                errors.push(format!("Vertex {} latitude out of range", idx));
            }
            if vertex[1] < -180.0 || vertex[1] > 180.0 {
                errors.push(format!("Vertex {} longitude out of range", idx));
            }
        }

        errors
    }
}
