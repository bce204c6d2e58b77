//! Human-readable formatting for metric quantities.

/// Format a radius in metres for display, switching to kilometres at 1 km.
///
/// # Examples
/// ```
/// use caseview_core::display::format_radius;
///
/// assert_eq!(format_radius(250.0), "250m");
/// assert_eq!(format_radius(1_500.0), "1.5km");
/// ```
#[must_use]
pub fn format_radius(radius_m: f64) -> String {
    if radius_m < 1_000.0 {
        format!("{}m", radius_m.round())
    } else {
        format!("{:.1}km", radius_m / 1_000.0)
    }
}

/// Format an area in square metres, switching to km² at one million m².
#[must_use]
pub fn format_area(area_m2: f64) -> String {
    if area_m2 < 1_000_000.0 {
        format!("{} m²", area_m2.round())
    } else {
        format!("{:.2} km²", area_m2 / 1_000_000.0)
    }
}
