//! Circle radius validation.

use geo::Coord;
use thiserror::Error;

/// Minimum circle radius in metres (inclusive).
pub const CIRCLE_MIN_RADIUS_M: f64 = 10.0;

/// Maximum circle radius in metres (inclusive).
pub const CIRCLE_MAX_RADIUS_M: f64 = 50_000.0;

/// Derived measurements for an accepted circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMetrics {
    /// Radius in metres.
    pub radius_m: f64,
    /// Planar area in square metres, `π·r²`.
    pub area_m2: f64,
}

/// Rejection reasons for [`validate_circle`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CircleRejection {
    /// The radius fell below [`CIRCLE_MIN_RADIUS_M`].
    #[error("Circle too small - minimum radius is 10m")]
    TooSmall {
        /// The rejected radius in metres.
        radius_m: f64,
    },
    /// The radius exceeded [`CIRCLE_MAX_RADIUS_M`].
    #[error("Circle too large - maximum radius is 50km")]
    TooLarge {
        /// The rejected radius in metres.
        radius_m: f64,
    },
}

/// Validate a circle's radius against the size policy.
///
/// Both bounds are inclusive: a 10 m radius is valid, a 9 m radius is not.
/// The centre does not affect validity but is accepted for interface
/// symmetry with the other shape validators.
///
/// # Errors
/// Returns [`CircleRejection::TooSmall`] or [`CircleRejection::TooLarge`]
/// when the radius is outside `10..=50_000` metres.
pub fn validate_circle(
    _center: Coord<f64>,
    radius_m: f64,
) -> Result<CircleMetrics, CircleRejection> {
    if radius_m < CIRCLE_MIN_RADIUS_M {
        return Err(CircleRejection::TooSmall { radius_m });
    }
    if radius_m > CIRCLE_MAX_RADIUS_M {
        return Err(CircleRejection::TooLarge { radius_m });
    }
    Ok(CircleMetrics {
        radius_m,
        area_m2: std::f64::consts::PI * radius_m * radius_m,
    })
}
