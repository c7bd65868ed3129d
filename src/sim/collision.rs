//! Force field and paddle contact math
//!
//! The engine works edge by edge: once the swept ball path crosses a wall,
//! the crossing is compared against that wall's paddle to decide between a
//! catch (curved reflection) and a loss.

use glam::DVec2;

use super::paddle::PaddleInput;
use super::segment::{Intersection, LineSegment};
use crate::settings::Settings;
use crate::{edge_inward_normal, edge_outward_normal, edge_tangent};

/// Outcome of the ball reaching an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Paddle covers the crossing
    Caught { edge: usize, offset: f64 },
    /// Crossing lies outside the paddle
    Lost { edge: usize, offset: f64 },
}

/// Acceleration from the central force at `pos`
///
/// Outside `core_radius` the ball is pulled in with `-G r / |r|^3`; inside
/// it is pushed out twice as hard. The radius is floored at `min_radius`.
pub fn central_acceleration(pos: DVec2, settings: &Settings) -> DVec2 {
    let rr = pos.length();
    let floored = rr.max(settings.min_radius);
    let inv_cube = 1.0 / (floored * floored * floored);

    if rr > settings.core_radius {
        pos * (-settings.gravity * inv_cube)
    } else {
        pos * (2.0 * settings.gravity * inv_cube)
    }
}

/// Whether `path` heads out of the hexagon through `edge`
#[inline]
pub fn exits_through(path: &LineSegment, edge: usize) -> bool {
    (path.b - path.a).dot(edge_outward_normal(edge)) > 0.0
}

/// Signed distance from the paddle center to the crossing, as a fraction of the edge
pub fn paddle_offset(its: &Intersection, wall_length: f64, paddle: &PaddleInput) -> f64 {
    its.t2 / wall_length - paddle.center_fraction()
}

/// Catch if the crossing is strictly within the paddle's half-width
pub fn classify(edge: usize, offset: f64, half_width: f64) -> Contact {
    if offset.abs() < half_width {
        Contact::Caught { edge, offset }
    } else {
        Contact::Lost { edge, offset }
    }
}

/// Weight of the tangent in the outgoing direction, in [-1/2, 1/2] for a catch
#[inline]
pub fn tangent_weight(offset: f64, half_width: f64) -> f64 {
    let ratio = offset / half_width;
    ratio * ratio.abs() / 2.0
}

/// Outgoing unit direction after a catch on `edge`
///
/// The inward normal is bent along the edge toward the side of the paddle
/// that was hit, more strongly the further from center.
pub fn deflection(edge: usize, offset: f64, half_width: f64) -> DVec2 {
    let dir = edge_inward_normal(edge) + edge_tangent(edge) * tangent_weight(offset, half_width);
    // |dir| >= 1 since the two terms are orthogonal
    dir.normalize()
}
