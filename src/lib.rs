//! Hex Pong - six paddles defending a hexagon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (force field, swept collisions, paddles, AI)
//! - `settings`: Construction-time tuning, loadable from JSON
//!
//! Rendering, windowing and input capture live outside this crate. The
//! simulation only consumes decoded movement intents and exposes the ball
//! position, paddle offsets and per-tick events.

pub mod settings;
pub mod sim;

pub use settings::{LossPolicy, Settings, SettingsError};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Number of hexagon edges (and paddles)
    pub const EDGE_COUNT: usize = 6;

    /// Fixed simulation timestep (seconds)
    pub const SIM_DT: f64 = 0.005;

    /// Hexagon scale (1.0 = unit circumradius, edge length 1)
    pub const HEX_SCALE: f64 = 1.0;

    /// Paddle half-width, in paddle position units
    pub const PADDLE_HALF_WIDTH: f64 = 0.2;
    /// Paddle half-height (drawn thickness, not used by collisions)
    pub const PADDLE_HALF_HEIGHT: f64 = 0.05;
    /// Paddle travel speed (position units per second)
    pub const PADDLE_SPEED: f64 = 2.0;

    /// Fixed ball speed after a paddle catch
    pub const BALL_SPEED: f64 = PADDLE_SPEED * 0.6 / (1.0 - PADDLE_HALF_WIDTH);

    /// Central force strength (G)
    pub const FORCE_STRENGTH: f64 = 0.1;
    /// Inside this radius the force turns repulsive
    pub const CORE_RADIUS: f64 = 0.05;
    /// Smallest radius used in the inverse-cube term
    pub const MIN_RADIUS: f64 = 1e-3;

    /// Ball spawn offset from the center
    pub const SPAWN_OFFSET: (f64, f64) = (0.2, 0.0);
}

/// Angle of edge `edge` relative to the bottom edge (radians)
#[inline]
pub fn edge_angle(edge: usize) -> f64 {
    (edge % consts::EDGE_COUNT) as f64 * std::f64::consts::FRAC_PI_3
}

/// Unit vector along edge `edge`, from its first vertex to its second
#[inline]
pub fn edge_tangent(edge: usize) -> DVec2 {
    DVec2::from_angle(edge_angle(edge))
}

/// Unit normal of edge `edge` pointing toward the hexagon center
#[inline]
pub fn edge_inward_normal(edge: usize) -> DVec2 {
    edge_tangent(edge).perp()
}

/// Unit normal of edge `edge` pointing out of the hexagon
#[inline]
pub fn edge_outward_normal(edge: usize) -> DVec2 {
    -edge_inward_normal(edge)
}

/// Hexagon vertices, counter-clockwise, starting at the left end of the bottom edge
pub fn hexagon_vertices(scale: f64) -> [DVec2; consts::EDGE_COUNT] {
    let h = 3.0_f64.sqrt() / 2.0;
    [
        DVec2::new(-0.5, -h),
        DVec2::new(0.5, -h),
        DVec2::new(1.0, 0.0),
        DVec2::new(0.5, h),
        DVec2::new(-0.5, h),
        DVec2::new(-1.0, 0.0),
    ]
    .map(|v| v * scale)
}

/// Whether `point` lies strictly inside the hexagon of the given scale
pub fn is_in_hexagon(point: DVec2, scale: f64) -> bool {
    let vertices = hexagon_vertices(scale);
    (0..consts::EDGE_COUNT).all(|edge| (point - vertices[edge]).dot(edge_inward_normal(edge)) > 0.0)
}
