//! Spherical-Mercator projection onto the unit square.
//!
//! Cluster levels work in projected space so that a pixel radius maps to a
//! single distance per zoom level. Longitude maps linearly to `x`;
//! latitude maps through the Mercator stretch to `y`, clamped at the poles
//! where the projection diverges.

use std::f64::consts::PI;

use geo::Coord;

/// Project a longitude/latitude coordinate into the unit square.
pub(crate) fn project(location: Coord<f64>) -> [f64; 2] {
    let x = location.x / 360.0 + 0.5;
    let sin = location.y.to_radians().sin();
    let y = 0.5 - 0.25 * ((1.0 + sin) / (1.0 - sin)).ln() / PI;
    [x, y.clamp(0.0, 1.0)]
}

/// Invert [`project`], recovering a longitude/latitude coordinate.
pub(crate) fn unproject(pos: [f64; 2]) -> Coord<f64> {
    let x = (pos[0] - 0.5) * 360.0;
    let y2 = (180.0 - pos[1] * 360.0).to_radians();
    let y = 360.0 * y2.exp().atan() / PI - 90.0;
    Coord { x, y }
}
