use crate::constants::{DEFAULT_MAX_SAMPLE_POINTS, POLYLINE_PRECISION};
use crate::error::{AppError, Result};
use crate::models::GeoPoint;
use geo::LineString;

/// Picks a bounded set of evenly spaced points along an encoded route
/// geometry, used as search origins for nearby attractions.
#[derive(Debug, Clone, Copy)]
pub struct PolylineSampler {
    max_samples: usize,
}

impl Default for PolylineSampler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SAMPLE_POINTS)
    }
}

impl PolylineSampler {
    pub fn new(max_samples: usize) -> Self {
        PolylineSampler { max_samples }
    }

    /// Decode `encoded` and return up to `max_samples` of its points, the
    /// first always being the route's first point.
    pub fn sample(&self, encoded: &str) -> Result<Vec<GeoPoint>> {
        let path = decode_path(encoded)?;
        let samples: Vec<GeoPoint> = sample_indices(path.len(), self.max_samples)
            .into_iter()
            .map(|i| path[i])
            .collect();

        tracing::debug!(
            path_points = path.len(),
            samples = samples.len(),
            "Sampled {} of {} route points",
            samples.len(),
            path.len()
        );

        Ok(samples)
    }
}

/// Decode a provider polyline into `(lat, lng)` points, in order.
pub fn decode_path(encoded: &str) -> Result<Vec<GeoPoint>> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let line: LineString<f64> = polyline::decode_polyline(encoded, POLYLINE_PRECISION)
        .map_err(|e| AppError::Decode(format!("Invalid encoded polyline: {}", e)))?;

    line.coords()
        .map(|c| GeoPoint::new(c.y, c.x).map_err(AppError::Decode))
        .collect()
}

/// Indices `floor(i * n / k)` for `i` in `0..k`, where `k = min(max_samples, n)`.
/// Strictly increasing, starting at 0, all below `n`.
pub fn sample_indices(n: usize, max_samples: usize) -> Vec<usize> {
    let k = max_samples.min(n);
    (0..k).map(|i| i * n / k).collect()
}
