//! Per-edge paddle input
//!
//! A paddle slides along its edge. Its position is a scalar in
//! `[left_limit, right_limit]`, where -1 and 1 are the edge's endpoints.

use serde::{Deserialize, Serialize};

/// Discrete movement intent for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Movement {
    #[default]
    Stop,
    /// Toward the edge's first vertex
    Left,
    /// Toward the edge's second vertex
    Right,
}

/// Paddle state for one edge
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaddleInput {
    /// Last applied movement
    pub movement: Movement,
    /// Current position along the edge
    pub pos: f64,
}

impl PaddleInput {
    /// Apply one tick of `movement`, moving by `step` and clamping to the limits
    ///
    /// Returns the new position.
    pub fn update(&mut self, movement: Movement, step: f64, left_limit: f64, right_limit: f64) -> f64 {
        self.movement = movement;
        match movement {
            Movement::Stop => {}
            Movement::Left => {
                if self.pos > left_limit {
                    self.pos = (self.pos - step).max(left_limit);
                }
            }
            Movement::Right => {
                if self.pos < right_limit {
                    self.pos = (self.pos + step).min(right_limit);
                }
            }
        }
        self.pos
    }

    /// Paddle center as a fraction of the edge length (0 = first vertex)
    #[inline]
    pub fn center_fraction(&self) -> f64 {
        (self.pos + 1.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STEP: f64 = 0.01;
    const LEFT: f64 = -0.8;
    const RIGHT: f64 = 0.8;

    #[test]
    fn test_stop_keeps_position() {
        let mut paddle = PaddleInput { pos: 0.3, ..Default::default() };
        assert_eq!(paddle.update(Movement::Stop, STEP, LEFT, RIGHT), 0.3);
        assert_eq!(paddle.movement, Movement::Stop);
    }

    #[test]
    fn test_left_right_step() {
        let mut paddle = PaddleInput::default();
        let pos = paddle.update(Movement::Right, STEP, LEFT, RIGHT);
        assert!((pos - STEP).abs() < 1e-12);
        paddle.update(Movement::Left, STEP, LEFT, RIGHT);
        let pos = paddle.update(Movement::Left, STEP, LEFT, RIGHT);
        assert!((pos + STEP).abs() < 1e-12);
        assert_eq!(paddle.movement, Movement::Left);
    }

    #[test]
    fn test_clamps_at_limits() {
        let mut paddle = PaddleInput { pos: 0.795, ..Default::default() };
        assert_eq!(paddle.update(Movement::Right, STEP, LEFT, RIGHT), RIGHT);
        assert_eq!(paddle.update(Movement::Right, STEP, LEFT, RIGHT), RIGHT);

        let mut paddle = PaddleInput { pos: -0.795, ..Default::default() };
        assert_eq!(paddle.update(Movement::Left, STEP, LEFT, RIGHT), LEFT);
    }

    #[test]
    fn test_center_fraction() {
        let paddle = PaddleInput { pos: 0.0, ..Default::default() };
        assert_eq!(paddle.center_fraction(), 0.5);
        let paddle = PaddleInput { pos: RIGHT, ..Default::default() };
        assert!((paddle.center_fraction() - 0.9).abs() < 1e-12);
    }

    fn movement() -> impl Strategy<Value = Movement> {
        prop_oneof![Just(Movement::Stop), Just(Movement::Left), Just(Movement::Right)]
    }

    proptest! {
        #[test]
        fn prop_position_stays_clamped(
            moves in proptest::collection::vec(movement(), 0..500),
            step in 0.001..0.5f64,
        ) {
            let mut paddle = PaddleInput::default();
            for m in moves {
                let pos = paddle.update(m, step, LEFT, RIGHT);
                prop_assert!((LEFT..=RIGHT).contains(&pos));
            }
        }
    }
}
