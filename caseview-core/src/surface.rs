//! Scoped binding to the map rendering surface.
//!
//! The rendering surface itself is outside this library. Its contract is
//! small: it can report the current viewport (bounding box plus zoom).
//! `SurfaceBinding` replaces the module-load side effects of earlier
//! incarnations with an explicit lifecycle: the binding owns the surface
//! handle while attached and releases it on `detach` or drop, so event
//! handlers and styles registered against the surface are always cleaned
//! up.

use geo::Rect;

/// Viewport state reported by the rendering surface.
///
/// The bounding box is axis-aligned in lon/lat space. Viewports crossing
/// the antimeridian are not modelled; callers must split such views into
/// two boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Visible bounding box, WGS84 lon/lat.
    pub bbox: Rect<f64>,
    /// Map zoom level; fractional values are allowed.
    pub zoom: f64,
}

/// Contract for the out-of-scope map rendering surface.
pub trait MapSurface {
    /// The currently visible viewport.
    fn viewport(&self) -> Viewport;
}

/// Owns a [`MapSurface`] handle for the duration of an attachment.
///
/// # Examples
/// ```
/// use geo::{Coord, Rect};
/// use caseview_core::surface::{MapSurface, SurfaceBinding, Viewport};
///
/// struct FixedSurface(Viewport);
/// impl MapSurface for FixedSurface {
///     fn viewport(&self) -> Viewport {
///         self.0
///     }
/// }
///
/// let viewport = Viewport {
///     bbox: Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 }),
///     zoom: 12.0,
/// };
/// let mut binding = SurfaceBinding::attach(FixedSurface(viewport));
/// assert_eq!(binding.viewport(), Some(viewport));
/// binding.detach();
/// assert_eq!(binding.viewport(), None);
/// ```
#[derive(Debug)]
pub struct SurfaceBinding<S: MapSurface> {
    surface: Option<S>,
}

impl<S: MapSurface> SurfaceBinding<S> {
    /// Take ownership of a surface handle.
    pub fn attach(surface: S) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// Whether the binding currently holds a surface.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// The current viewport, while attached.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.surface.as_ref().map(MapSurface::viewport)
    }

    /// Release the surface handle, returning it to the caller.
    ///
    /// Idempotent: detaching an already-detached binding returns `None`.
    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }
}

impl<S: MapSurface> Drop for SurfaceBinding<S> {
    fn drop(&mut self) {
        // Dropping the handle releases whatever the surface registered.
        drop(self.surface.take());
    }
}
