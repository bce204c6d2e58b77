//! POI placement validation, spacing and snapping policies.

use geo::Coord;
use thiserror::Error;

use crate::aoi::Poi;
use crate::spatial::haversine_distance_m;

/// Minimum spacing between POIs in metres.
pub const POI_MIN_SPACING_M: f64 = 10.0;

/// Maximum distance at which coordinates snap to a target, in metres.
pub const POI_SNAP_DISTANCE_M: f64 = 20.0;

/// Maximum POI name length in characters.
pub const POI_NAME_MAX_LEN: usize = 100;

/// Multiplier for 5-decimal coordinate rounding (~1 m precision).
const COORDINATE_SCALE: f64 = 1e5;

/// Accepted POI placement with normalised coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedPoi {
    /// Coordinates rounded to five decimal places.
    pub location: Coord<f64>,
}

/// Rejection reasons for [`validate_poi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoiRejection {
    /// A coordinate was NaN or infinite.
    #[error("Invalid coordinates - must be numbers")]
    NonFiniteCoordinates,
    /// Longitude outside `[-180, 180]`.
    #[error("Longitude must be between -180 and 180 degrees")]
    LongitudeOutOfRange,
    /// Latitude outside `[-90, 90]`.
    #[error("Latitude must be between -90 and 90 degrees")]
    LatitudeOutOfRange,
    /// The name was empty after trimming.
    #[error("POI name cannot be empty")]
    EmptyName,
    /// The name exceeded [`POI_NAME_MAX_LEN`] characters.
    #[error("POI name must be less than 100 characters")]
    NameTooLong,
}

/// Rejection for placements violating the spacing policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoiSpacingRejection {
    /// Another POI sits within the minimum spacing.
    #[error("POI too close to existing POI \"{}\" ({:.0}m away)", nearby.name, distance_m)]
    TooClose {
        /// The first conflicting POI, in input order.
        nearby: Box<Poi>,
        /// Distance to the conflicting POI in metres.
        distance_m: f64,
    },
}

/// Result of a snapping attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    /// Final coordinates: the snap target, or the original when unsnapped.
    pub location: Coord<f64>,
    /// The target that was snapped to, when one was within range.
    pub target: Option<Coord<f64>>,
}

impl Snap {
    /// Whether a snap occurred.
    #[must_use]
    pub const fn snapped(&self) -> bool {
        self.target.is_some()
    }
}

/// Validate POI coordinates and an optional name.
///
/// On success the coordinates are rounded to five decimal places (about
/// one metre).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use caseview_core::validate_poi;
///
/// let ok = validate_poi(Coord { x: -0.127612, y: 51.507414 }, Some("Stakeout"))
///     .expect("valid placement");
/// assert_eq!(ok.location, Coord { x: -0.12761, y: 51.50741 });
/// ```
///
/// # Errors
/// Returns the first applicable [`PoiRejection`]: non-finite coordinates,
/// out-of-range longitude or latitude, then name policy violations.
pub fn validate_poi(
    location: Coord<f64>,
    name: Option<&str>,
) -> Result<ValidatedPoi, PoiRejection> {
    if !location.x.is_finite() || !location.y.is_finite() {
        return Err(PoiRejection::NonFiniteCoordinates);
    }
    if !(-180.0..=180.0).contains(&location.x) {
        return Err(PoiRejection::LongitudeOutOfRange);
    }
    if !(-90.0..=90.0).contains(&location.y) {
        return Err(PoiRejection::LatitudeOutOfRange);
    }
    if let Some(name) = name {
        if name.trim().is_empty() {
            return Err(PoiRejection::EmptyName);
        }
        if name.chars().count() > POI_NAME_MAX_LEN {
            return Err(PoiRejection::NameTooLong);
        }
    }
    Ok(ValidatedPoi {
        location: round_coordinates(location),
    })
}

/// Check a new placement against existing POIs.
///
/// The first POI in input order within `min_distance_m` is reported; later
/// conflicts are not examined.
///
/// # Errors
/// Returns [`PoiSpacingRejection::TooClose`] naming the conflicting POI.
pub fn check_poi_spacing(
    location: Coord<f64>,
    existing: &[Poi],
    min_distance_m: f64,
) -> Result<(), PoiSpacingRejection> {
    for poi in existing {
        let distance_m = haversine_distance_m(location, poi.location);
        if distance_m < min_distance_m {
            return Err(PoiSpacingRejection::TooClose {
                nearby: Box::new(poi.clone()),
                distance_m,
            });
        }
    }
    Ok(())
}

/// Snap coordinates to the first target within `snap_distance_m`.
///
/// First-match semantics in target order, not nearest-match; with no target
/// in range the original coordinates come back unsnapped.
#[must_use]
pub fn snap_coordinates(
    location: Coord<f64>,
    targets: &[Coord<f64>],
    snap_distance_m: f64,
) -> Snap {
    targets
        .iter()
        .find(|target| haversine_distance_m(location, **target) <= snap_distance_m)
        .map_or(
            Snap {
                location,
                target: None,
            },
            |target| Snap {
                location: *target,
                target: Some(*target),
            },
        )
}

fn round_coordinates(location: Coord<f64>) -> Coord<f64> {
    Coord {
        x: (location.x * COORDINATE_SCALE).round() / COORDINATE_SCALE,
        y: (location.y * COORDINATE_SCALE).round() / COORDINATE_SCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::SystemTime;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    fn poi(id: &str, name: &str, location: Coord<f64>) -> Poi {
        Poi {
            id: id.into(),
            name: name.into(),
            location,
            user_id: "analyst".into(),
            color: "#4CBACB".into(),
            icon: "marker".into(),
            category: None,
            description: None,
            created_at: SystemTime::now(),
        }
    }

    #[rstest]
    #[case(c(f64::NAN, 0.0), PoiRejection::NonFiniteCoordinates)]
    #[case(c(0.0, f64::INFINITY), PoiRejection::NonFiniteCoordinates)]
    #[case(c(-180.5, 0.0), PoiRejection::LongitudeOutOfRange)]
    #[case(c(181.0, 0.0), PoiRejection::LongitudeOutOfRange)]
    #[case(c(0.0, -91.0), PoiRejection::LatitudeOutOfRange)]
    #[case(c(0.0, 90.5), PoiRejection::LatitudeOutOfRange)]
    fn rejects_bad_coordinates(#[case] location: Coord<f64>, #[case] expected: PoiRejection) {
        assert_eq!(validate_poi(location, None), Err(expected));
    }

    #[rstest]
    fn boundary_coordinates_are_valid() {
        assert!(validate_poi(c(180.0, 90.0), None).is_ok());
        assert!(validate_poi(c(-180.0, -90.0), None).is_ok());
    }

    #[rstest]
    #[case("   ", PoiRejection::EmptyName)]
    #[case("", PoiRejection::EmptyName)]
    fn rejects_blank_names(#[case] name: &str, #[case] expected: PoiRejection) {
        assert_eq!(validate_poi(c(0.0, 0.0), Some(name)), Err(expected));
    }

    #[rstest]
    fn rejects_names_over_one_hundred_characters() {
        let long = "x".repeat(101);
        assert_eq!(
            validate_poi(c(0.0, 0.0), Some(&long)),
            Err(PoiRejection::NameTooLong)
        );
        let exact = "x".repeat(100);
        assert!(validate_poi(c(0.0, 0.0), Some(&exact)).is_ok());
    }

    #[rstest]
    fn rounds_to_five_decimals() {
        let ok = validate_poi(c(-0.127612345, 51.507415678), None).expect("valid");
        assert_eq!(ok.location, c(-0.12761, 51.50742));
    }

    #[rstest]
    fn spacing_reports_the_first_conflict_in_input_order() {
        let near_a = poi("poi-1", "Alpha", c(0.0, 0.0));
        let near_b = poi("poi-2", "Bravo", c(0.00001, 0.0));
        let err = check_poi_spacing(c(0.000005, 0.0), &[near_a, near_b], POI_MIN_SPACING_M)
            .expect_err("both conflict");
        let PoiSpacingRejection::TooClose { nearby, distance_m } = err;
        assert_eq!(nearby.name, "Alpha");
        assert!(distance_m < POI_MIN_SPACING_M);
    }

    #[rstest]
    fn spacing_accepts_distant_placements() {
        let existing = poi("poi-1", "Alpha", c(0.0, 0.0));
        assert!(check_poi_spacing(c(0.01, 0.0), &[existing], POI_MIN_SPACING_M).is_ok());
    }

    #[rstest]
    fn snap_takes_the_first_target_within_range() {
        let origin = c(-0.12761, 51.50741);
        let target = c(-0.1276, 51.5074);
        let snap = snap_coordinates(origin, &[target], POI_SNAP_DISTANCE_M);
        assert!(snap.snapped());
        assert_eq!(snap.location, target);
    }

    #[rstest]
    fn snap_prefers_input_order_over_proximity() {
        let origin = c(0.0, 0.0);
        // Both within 20m; the farther one comes first.
        let farther = c(0.00015, 0.0);
        let nearer = c(0.00005, 0.0);
        let snap = snap_coordinates(origin, &[farther, nearer], POI_SNAP_DISTANCE_M);
        assert_eq!(snap.location, farther);
    }

    #[rstest]
    fn snap_returns_original_when_nothing_is_in_range() {
        let origin = c(0.0, 0.0);
        let distant = c(1.0, 1.0);
        let snap = snap_coordinates(origin, &[distant], POI_SNAP_DISTANCE_M);
        assert!(!snap.snapped());
        assert_eq!(snap.location, origin);
    }
}
