use serde::{Deserialize, Serialize};

/// Point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cubic bezier control points for the segment ending at a curve point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoints {
    pub p1: PixelPoint,
    pub p2: PixelPoint,
}

/// Boundary vertex plus the control points of the segment that ends on it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
    pub control: Option<ControlPoints>,
}

impl CurvePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            control: None,
        }
    }

    #[must_use]
    pub const fn position(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }
}

/// Drawn silhouette edges of one layer at one column.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundaryPoint {
    pub top: CurvePoint,
    pub bottom: CurvePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

impl BoundaryPoint {
    fn edge(&self, edge: Edge) -> &CurvePoint {
        match edge {
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
        }
    }

    fn edge_mut(&mut self, edge: Edge) -> &mut CurvePoint {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
        }
    }
}

/// Clamps curve tension into `(0, 1]`; zero or NaN selects `0.5`.
#[must_use]
pub fn normalize_tension(tension: f64) -> f64 {
    if tension == 0.0 || tension.is_nan() {
        0.5
    } else if tension < 0.0 {
        0.00001
    } else {
        tension.min(1.0)
    }
}

/// Divisor applied to Catmull-Rom tangents. Tension `1` gives an infinite
/// divisor, which collapses control points onto the segment endpoints.
#[must_use]
pub fn control_point_scaler(tension: f64) -> f64 {
    -6.0 / (normalize_tension(tension) - 1.0)
}

/// Derives control points for one edge, walking `points` front to back.
///
/// Neighbors `i-2`, `i-1` and `i+1` are clamped to the sequence bounds.
pub fn decorate_beziers(points: &mut [BoundaryPoint], edge: Edge, scaler: f64) {
    let len = points.len();
    for i in 0..len {
        let p1 = points[i.saturating_sub(2)].edge(edge).position();
        let p2 = points[i.saturating_sub(1)].edge(edge).position();
        let current = points[i].edge(edge).position();
        let next = points[(i + 1).min(len - 1)].edge(edge).position();

        let dx1 = (current.x - p1.x) / scaler;
        let dy1 = (current.y - p1.y) / scaler;
        let dx2 = (next.x - p2.x) / scaler;
        let dy2 = (next.y - p2.y) / scaler;

        points[i].edge_mut(edge).control = Some(ControlPoints {
            p1: PixelPoint::new(p2.x + dx1, p2.y + dy1),
            p2: PixelPoint::new(current.x - dx2, current.y - dy2),
        });
    }
}

/// Adds control points to both edges of a layer outline.
///
/// The bottom edge is traversed in reverse so its control points describe
/// the return path of the filled silhouette.
pub fn add_control_points(points: &mut [BoundaryPoint], tension: f64) {
    let scaler = control_point_scaler(tension);
    decorate_beziers(points, Edge::Top, scaler);
    points.reverse();
    decorate_beziers(points, Edge::Bottom, scaler);
    points.reverse();
}
