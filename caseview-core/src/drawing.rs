//! Drawing-tool state machine.
//!
//! The tool is an explicit value transitioned by discrete input events,
//! decoupled from any rendering layer. A draw session moves
//! `Idle → Placing → Complete`; completion runs the shape validator and a
//! rejected shape is discarded, returning the tool to `Idle` with the
//! rejection surfaced to the caller. Only one session exists per tool —
//! concurrent drawing is prevented by the surrounding UI, not here.

use geo::Coord;
use thiserror::Error;

use crate::geometry::points_nearby;
use crate::validate::{
    PolygonMetrics, PolygonRejection, TriangleMetrics, TriangleRejection, validate_polygon,
    validate_triangle,
};

/// Degree-space threshold for clicking "near" the first vertex to close a
/// polygon (roughly 10 px at zoom 10).
pub const CLOSE_THRESHOLD_DEG: f64 = 0.001;

/// Which shape the tool is drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Three clicks produce a triangle.
    Triangle,
    /// Clicks accumulate vertices; the ring closes explicitly.
    Polygon,
}

/// A discrete input event from the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawInput {
    /// A click at the given lon/lat position.
    Click(Coord<f64>),
    /// A double-click, closing a polygon ring.
    DoubleClick,
    /// The Enter key, closing a polygon ring.
    Enter,
    /// The Escape key, cancelling the session.
    Escape,
    /// The Backspace key, removing the last placed vertex.
    Backspace,
}

/// Current state of a drawing session.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawState {
    /// No session in progress.
    Idle,
    /// Vertices placed so far.
    Placing(Vec<Coord<f64>>),
    /// A validated shape awaiting collection via
    /// [`DrawingTool::take_shape`].
    Complete(DrawnShape),
}

/// A validated shape produced by a completed session.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawnShape {
    /// A triangle and its metrics.
    Triangle {
        /// The three corners in placement order.
        vertices: [Coord<f64>; 3],
        /// Validation metrics.
        metrics: TriangleMetrics,
    },
    /// A polygon ring and its metrics.
    Polygon {
        /// The boundary in placement order, implicitly closed.
        vertices: Vec<Coord<f64>>,
        /// Validation metrics.
        metrics: PolygonMetrics,
    },
}

/// Why a completion attempt discarded the session.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DrawRejection {
    /// The triangle validator rejected the shape.
    #[error(transparent)]
    Triangle(#[from] TriangleRejection),
    /// The polygon validator rejected the shape.
    #[error(transparent)]
    Polygon(#[from] PolygonRejection),
    /// A close was requested with fewer vertices than the shape needs.
    #[error("Not enough vertices to close the shape")]
    Incomplete,
}

/// An interactive drawing session for one shape.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use caseview_core::drawing::{DrawInput, DrawMode, DrawingTool, DrawnShape};
///
/// let mut tool = DrawingTool::new(DrawMode::Triangle);
/// for (x, y) in [(0.0, 0.0), (0.1, 0.0), (0.0, 0.1)] {
///     tool.apply(DrawInput::Click(Coord { x, y })).expect("accepted");
/// }
/// let shape = tool.take_shape().expect("completed");
/// assert!(matches!(shape, DrawnShape::Triangle { .. }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingTool {
    mode: DrawMode,
    state: DrawState,
}

impl DrawingTool {
    /// Start an idle tool for the given mode.
    #[must_use]
    pub const fn new(mode: DrawMode) -> Self {
        Self {
            mode,
            state: DrawState::Idle,
        }
    }

    /// The tool's shape mode.
    #[must_use]
    pub const fn mode(&self) -> DrawMode {
        self.mode
    }

    /// The current session state.
    #[must_use]
    pub const fn state(&self) -> &DrawState {
        &self.state
    }

    /// Apply one input event.
    ///
    /// A completion attempt that fails validation discards the placed
    /// vertices (the session returns to `Idle`) and reports the rejection,
    /// mirroring the auto-discard behaviour of the surrounding UI.
    ///
    /// # Errors
    /// Returns a [`DrawRejection`] when a completion attempt fails; all
    /// other inputs are infallible.
    pub fn apply(&mut self, input: DrawInput) -> Result<(), DrawRejection> {
        match input {
            DrawInput::Click(position) => self.click(position),
            DrawInput::DoubleClick | DrawInput::Enter => self.close_requested(),
            DrawInput::Escape => {
                self.state = DrawState::Idle;
                Ok(())
            }
            DrawInput::Backspace => {
                self.backspace();
                Ok(())
            }
        }
    }

    /// Collect the completed shape, resetting the tool to `Idle`.
    ///
    /// Returns `None` unless the session is in the `Complete` state.
    pub fn take_shape(&mut self) -> Option<DrawnShape> {
        match std::mem::replace(&mut self.state, DrawState::Idle) {
            DrawState::Complete(shape) => Some(shape),
            other => {
                self.state = other;
                None
            }
        }
    }

    fn click(&mut self, position: Coord<f64>) -> Result<(), DrawRejection> {
        match &mut self.state {
            DrawState::Idle => {
                self.state = DrawState::Placing(vec![position]);
                Ok(())
            }
            DrawState::Placing(vertices) => {
                if self.mode == DrawMode::Polygon
                    && vertices.len() >= 3
                    && vertices
                        .first()
                        .is_some_and(|first| points_nearby(position, *first, CLOSE_THRESHOLD_DEG))
                {
                    return self.close_requested();
                }
                vertices.push(position);
                if self.mode == DrawMode::Triangle && vertices.len() == 3 {
                    return self.close_requested();
                }
                Ok(())
            }
            // A completed shape must be collected first.
            DrawState::Complete(_) => Ok(()),
        }
    }

    fn close_requested(&mut self) -> Result<(), DrawRejection> {
        let DrawState::Placing(vertices) = &self.state else {
            return Ok(());
        };
        let vertices = vertices.clone();
        let result = match self.mode {
            DrawMode::Triangle => match <[Coord<f64>; 3]>::try_from(vertices) {
                Ok(corners) => validate_triangle(&corners)
                    .map(|metrics| DrawnShape::Triangle {
                        vertices: corners,
                        metrics,
                    })
                    .map_err(DrawRejection::from),
                Err(_) => Err(DrawRejection::Incomplete),
            },
            DrawMode::Polygon => {
                if vertices.len() < 3 {
                    Err(DrawRejection::Incomplete)
                } else {
                    validate_polygon(&vertices)
                        .map(|metrics| DrawnShape::Polygon { vertices, metrics })
                        .map_err(DrawRejection::from)
                }
            }
        };
        match result {
            Ok(shape) => {
                self.state = DrawState::Complete(shape);
                Ok(())
            }
            Err(rejection) => {
                self.state = DrawState::Idle;
                Err(rejection)
            }
        }
    }

    fn backspace(&mut self) {
        if let DrawState::Placing(vertices) = &mut self.state {
            vertices.pop();
            if vertices.is_empty() {
                self.state = DrawState::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    fn click(tool: &mut DrawingTool, x: f64, y: f64) -> Result<(), DrawRejection> {
        tool.apply(DrawInput::Click(c(x, y)))
    }

    #[rstest]
    fn triangle_completes_on_the_third_click() {
        let mut tool = DrawingTool::new(DrawMode::Triangle);
        click(&mut tool, 0.0, 0.0).expect("first");
        click(&mut tool, 0.1, 0.0).expect("second");
        assert!(matches!(tool.state(), DrawState::Placing(v) if v.len() == 2));
        click(&mut tool, 0.0, 0.1).expect("third completes");
        let shape = tool.take_shape().expect("triangle produced");
        assert!(matches!(shape, DrawnShape::Triangle { .. }));
        assert_eq!(*tool.state(), DrawState::Idle);
    }

    #[rstest]
    fn tiny_triangle_is_discarded_with_the_rejection() {
        let mut tool = DrawingTool::new(DrawMode::Triangle);
        click(&mut tool, 0.0, 0.0).expect("first");
        click(&mut tool, 0.001, 0.0).expect("second");
        let err = click(&mut tool, 0.0, 0.001).expect_err("sliver rejected");
        assert!(matches!(err, DrawRejection::Triangle(_)));
        assert_eq!(*tool.state(), DrawState::Idle);
    }

    #[rstest]
    fn polygon_closes_via_enter() {
        let mut tool = DrawingTool::new(DrawMode::Polygon);
        for (x, y) in [(0.0, 0.0), (0.1, 0.0), (0.1, 0.1), (0.0, 0.1)] {
            click(&mut tool, x, y).expect("vertex");
        }
        tool.apply(DrawInput::Enter).expect("ring closes");
        let shape = tool.take_shape().expect("polygon produced");
        assert!(matches!(shape, DrawnShape::Polygon { vertices, .. } if vertices.len() == 4));
    }

    #[rstest]
    fn polygon_closes_by_clicking_near_the_first_vertex() {
        let mut tool = DrawingTool::new(DrawMode::Polygon);
        for (x, y) in [(0.0, 0.0), (0.1, 0.0), (0.1, 0.1)] {
            click(&mut tool, x, y).expect("vertex");
        }
        // Within the close threshold of the first vertex.
        click(&mut tool, 0.0004, 0.0).expect("closes the ring");
        let shape = tool.take_shape().expect("polygon produced");
        assert!(matches!(shape, DrawnShape::Polygon { vertices, .. } if vertices.len() == 3));
    }

    #[rstest]
    fn closing_with_too_few_vertices_is_rejected() {
        let mut tool = DrawingTool::new(DrawMode::Polygon);
        click(&mut tool, 0.0, 0.0).expect("vertex");
        click(&mut tool, 0.1, 0.0).expect("vertex");
        let err = tool.apply(DrawInput::Enter).expect_err("two vertices");
        assert_eq!(err, DrawRejection::Incomplete);
        assert_eq!(*tool.state(), DrawState::Idle);
    }

    #[rstest]
    fn backspace_removes_the_last_vertex_and_empties_to_idle() {
        let mut tool = DrawingTool::new(DrawMode::Polygon);
        click(&mut tool, 0.0, 0.0).expect("vertex");
        click(&mut tool, 0.1, 0.0).expect("vertex");
        tool.apply(DrawInput::Backspace).expect("pop");
        assert!(matches!(tool.state(), DrawState::Placing(v) if v.len() == 1));
        tool.apply(DrawInput::Backspace).expect("pop to idle");
        assert_eq!(*tool.state(), DrawState::Idle);
    }

    #[rstest]
    fn escape_cancels_the_session() {
        let mut tool = DrawingTool::new(DrawMode::Polygon);
        click(&mut tool, 0.0, 0.0).expect("vertex");
        tool.apply(DrawInput::Escape).expect("cancel");
        assert_eq!(*tool.state(), DrawState::Idle);
        assert!(tool.take_shape().is_none());
    }

    #[rstest]
    fn self_intersecting_polygon_is_discarded() {
        let mut tool = DrawingTool::new(DrawMode::Polygon);
        for (x, y) in [(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)] {
            click(&mut tool, x, y).expect("vertex");
        }
        let err = tool.apply(DrawInput::DoubleClick).expect_err("bowtie");
        assert!(matches!(
            err,
            DrawRejection::Polygon(PolygonRejection::SelfIntersecting)
        ));
    }
}
