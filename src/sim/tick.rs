//! Fixed timestep simulation tick
//!
//! Advances the ball through the force field, tests the swept path against
//! all six walls and resolves the first crossing against its paddle.

use super::collision::{Contact, central_acceleration, classify, deflection, exits_through, paddle_offset};
use super::paddle::Movement;
use super::player::Player;
use super::segment::LineSegment;
use super::state::{PhysicsState, SimEvent, SimPhase};
use crate::consts::EDGE_COUNT;
use crate::settings::LossPolicy;

/// Movement commands for a single tick, indexed by edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub commands: [Movement; EDGE_COUNT],
}

impl TickInput {
    /// Ask every player for its command against the current state
    pub fn from_players(state: &PhysicsState, players: &[Player; EDGE_COUNT]) -> Self {
        Self {
            commands: std::array::from_fn(|edge| players[edge].decide(state, edge)),
        }
    }
}

/// Query the players, then advance the state by one tick
///
/// Players see the intersections cached by the previous tick.
pub fn step(state: &mut PhysicsState, players: &[Player; EDGE_COUNT]) {
    let input = TickInput::from_players(state, players);
    tick(state, &input);
}

/// Advance the state by one fixed timestep
pub fn tick(state: &mut PhysicsState, input: &TickInput) {
    state.events.clear();

    if state.phase == SimPhase::Halted {
        return;
    }
    state.time_ticks += 1;

    let dt = state.settings.dt;
    let half_width = state.settings.paddle_half_width;
    let ball_speed = state.settings.ball_speed;
    let on_loss = state.settings.on_loss;
    let reach = state.settings.swept_reach();

    // Integrate through the central force
    let acc = central_acceleration(state.pos, &state.settings);
    let next = state.pos + state.vel * dt + acc * (dt * dt / 2.0);
    state.vel += acc * dt;

    let path = LineSegment::new(state.pos, next);
    for (its, wall) in state.intersections.iter_mut().zip(&state.walls) {
        *its = path.intersect(wall);
    }

    let (step, left, right) = (
        state.settings.paddle_step(),
        state.settings.left_limit(),
        state.settings.right_limit(),
    );
    for (paddle, &movement) in state.paddles.iter_mut().zip(&input.commands) {
        paddle.update(movement, step, left, right);
    }

    let crossed = (0..EDGE_COUNT)
        .find(|&edge| state.intersections[edge].intersected && exits_through(&path, edge));

    let Some(edge) = crossed else {
        state.pos = next;
        return;
    };

    let its = state.intersections[edge];
    let offset = paddle_offset(&its, state.walls[edge].length(), &state.paddles[edge]);

    match classify(edge, offset, half_width) {
        Contact::Caught { edge, offset } => {
            let dir = deflection(edge, offset, half_width);

            // Finish the tick along the new direction, never behind the wall
            let remaining = reach - its.t1;
            let clamped = remaining.clamp(0.0, reach);
            if clamped != remaining {
                log::trace!("Edge {edge}: reflection remainder {remaining} clamped to {clamped}");
            }

            state.pos = its.point + dir * clamped;
            state.vel = dir * ball_speed;
            state.events.push(SimEvent::PaddleHit { edge, offset });
            log::debug!("Edge {edge} caught the ball (offset {offset:.3})");
        }
        Contact::Lost { edge, offset } => {
            state.losses[edge] += 1;
            state.events.push(SimEvent::Lost {
                edge,
                point: its.point,
            });
            log::info!("Edge {edge} lost (offset {offset:.3}, total {})", state.losses[edge]);

            match on_loss {
                LossPolicy::PassThrough => state.pos = next,
                LossPolicy::Respawn => state.reset_ball(),
                LossPolicy::Halt => {
                    state.pos = its.point;
                    state.phase = SimPhase::Halted;
                    state.events.push(SimEvent::Halted { edge });
                    log::info!("Simulation halted after loss on edge {edge}");
                }
            }
        }
    }
}
