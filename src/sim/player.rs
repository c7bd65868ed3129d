//! Paddle controllers
//!
//! Each edge is driven by one [`Player`]. Players never mutate the physics
//! state; they read it and answer with a [`Movement`] for their edge.

use super::paddle::Movement;
use super::segment::LineSegment;
use super::state::PhysicsState;
use crate::edge_outward_normal;

/// Crossing fractions the predictive AI accepts as "coming to my edge"
const PREDICTIVE_MARGIN: (f64, f64) = (-0.1, 1.1);
/// Crossing fractions the aggressive AI accepts
const AGGRESSIVE_MARGIN: (f64, f64) = (-0.5, 1.5);
/// Probe ray length in hexagon circumradii (longer than the diameter)
const PROBE_REACH: f64 = 4.0;

/// Key state for a human-controlled paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualInput {
    pub left: bool,
    pub right: bool,
}

impl ManualInput {
    /// Exactly one key moves the paddle; none or both stop it
    pub fn movement(&self) -> Movement {
        match (self.left, self.right) {
            (true, false) => Movement::Left,
            (false, true) => Movement::Right,
            _ => Movement::Stop,
        }
    }
}

/// Controller for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Player {
    /// Never moves
    #[default]
    Idle,
    /// Driven by two keys
    Manual(ManualInput),
    /// Projects the ball onto its edge along the edge normal
    Predictive,
    /// Follows the ball's actual swept path from the last tick
    Aggressive,
}

impl Player {
    /// Movement for `edge` given the current state
    ///
    /// # Panics
    ///
    /// The AI variants panic if `edge >= EDGE_COUNT`.
    pub fn decide(&self, state: &PhysicsState, edge: usize) -> Movement {
        match self {
            Player::Idle => Movement::Stop,
            Player::Manual(keys) => keys.movement(),
            Player::Predictive => predictive(state, edge),
            Player::Aggressive => aggressive(state, edge),
        }
    }

    /// Update key state; ignored by non-manual players
    pub fn set_keys(&mut self, left: bool, right: bool) {
        if let Player::Manual(keys) = self {
            keys.left = left;
            keys.right = right;
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Player::Idle => "idle",
            Player::Manual(_) => "manual",
            Player::Predictive => "predictive",
            Player::Aggressive => "aggressive",
        }
    }
}

/// Move toward `target`; the paddle only rests on limits, never on the target
fn steer(current: f64, target: f64) -> Movement {
    if target > current {
        Movement::Right
    } else {
        Movement::Left
    }
}

/// Paddle position whose center sits at `fraction` along the edge
#[inline]
fn position_for(fraction: f64) -> f64 {
    fraction * 2.0 - 1.0
}

fn within(fraction: f64, (low, high): (f64, f64)) -> bool {
    (low..=high).contains(&fraction)
}

fn predictive(state: &PhysicsState, edge: usize) -> Movement {
    let wall = state.wall(edge);
    let origin = state.ball_position();
    let reach = PROBE_REACH * state.settings().hex_scale;
    let probe = LineSegment::new(origin, origin + edge_outward_normal(edge) * reach);

    let its = probe.intersect(wall);
    let fraction = its.t2 / wall.length();
    let current = state.paddle(edge).pos;

    if within(fraction, PREDICTIVE_MARGIN) {
        steer(current, position_for(fraction))
    } else {
        steer(current, 0.0)
    }
}

fn aggressive(state: &PhysicsState, edge: usize) -> Movement {
    let its = state.intersection(edge);
    let fraction = its.t2 / state.wall(edge).length();
    let current = state.paddle(edge).pos;

    if its.t1 > 0.0 && within(fraction, AGGRESSIVE_MARGIN) {
        steer(current, position_for(fraction))
    } else {
        steer(current, 0.0)
    }
}
