//! Physics state and simulation events
//!
//! The state is built once per session and then only advanced by
//! [`super::tick`]. Renderers and players read it through the accessors.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::paddle::PaddleInput;
use super::segment::{Intersection, LineSegment};
use crate::consts::EDGE_COUNT;
use crate::hexagon_vertices;
use crate::settings::{Settings, SettingsError};

/// Whether ticks still advance the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    /// Stopped after a loss under [`crate::LossPolicy::Halt`]
    Halted,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Ball reflected off the paddle of `edge`
    PaddleHit { edge: usize, offset: f64 },
    /// Ball slipped past the paddle of `edge`
    Lost { edge: usize, point: DVec2 },
    /// Ball put back at the spawn point
    Respawned,
    /// Simulation halted after a loss on `edge`
    Halted { edge: usize },
}

/// Ball, walls and paddles
#[derive(Debug, Clone)]
pub struct PhysicsState {
    pub(crate) settings: Settings,
    pub(crate) pos: DVec2,
    pub(crate) vel: DVec2,
    pub(crate) walls: [LineSegment; EDGE_COUNT],
    pub(crate) paddles: [PaddleInput; EDGE_COUNT],
    /// Swept-path crossings from the most recent tick
    pub(crate) intersections: [Intersection; EDGE_COUNT],
    pub(crate) phase: SimPhase,
    pub(crate) time_ticks: u64,
    pub(crate) events: Vec<SimEvent>,
    pub(crate) losses: [u32; EDGE_COUNT],
    pub(crate) rng: Pcg32,
}

impl PhysicsState {
    /// Build the hexagon and place the ball at the spawn point
    ///
    /// `settings` is expected to be valid; see [`PhysicsState::try_new`].
    pub fn new(settings: Settings) -> Self {
        let vertices = hexagon_vertices(settings.hex_scale);
        let walls = std::array::from_fn(|edge| {
            LineSegment::new(vertices[edge], vertices[(edge + 1) % EDGE_COUNT])
        });

        Self {
            pos: settings.spawn_position,
            vel: settings.spawn_velocity,
            walls,
            paddles: [PaddleInput::default(); EDGE_COUNT],
            intersections: [Intersection::default(); EDGE_COUNT],
            phase: SimPhase::Running,
            time_ticks: 0,
            events: Vec::new(),
            losses: [0; EDGE_COUNT],
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
        }
    }

    /// Validate `settings` before building the state
    pub fn try_new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::new(settings))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ball_position(&self) -> DVec2 {
        self.pos
    }

    pub fn ball_velocity(&self) -> DVec2 {
        self.vel
    }

    /// # Panics
    ///
    /// Panics if `edge >= EDGE_COUNT`; the same holds for [`Self::paddle`]
    /// and [`Self::intersection`].
    pub fn wall(&self, edge: usize) -> &LineSegment {
        &self.walls[edge]
    }

    pub fn walls(&self) -> &[LineSegment; EDGE_COUNT] {
        &self.walls
    }

    pub fn paddle(&self, edge: usize) -> &PaddleInput {
        &self.paddles[edge]
    }

    /// Paddle offsets for all edges, as drawn by a renderer
    pub fn paddle_positions(&self) -> [f64; EDGE_COUNT] {
        self.paddles.map(|p| p.pos)
    }

    /// Swept-path crossing for `edge` computed by the last tick
    ///
    /// # Panics
    ///
    /// Panics if `edge >= EDGE_COUNT`.
    pub fn intersection(&self, edge: usize) -> &Intersection {
        &self.intersections[edge]
    }

    pub fn intersections(&self) -> &[Intersection; EDGE_COUNT] {
        &self.intersections
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Events raised by the last tick
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Take the events raised by the last tick
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Losses counted per edge since the session started
    pub fn losses(&self) -> [u32; EDGE_COUNT] {
        self.losses
    }

    /// Put the ball back at the spawn point and resume a halted session
    ///
    /// The spawn velocity is rotated by a random angle up to `serve_jitter`.
    pub fn reset_ball(&mut self) {
        let jitter = self.settings.serve_jitter;
        let angle = if jitter > 0.0 {
            self.rng.random_range(-jitter..=jitter)
        } else {
            0.0
        };

        self.pos = self.settings.spawn_position;
        self.vel = DVec2::from_angle(angle).rotate(self.settings.spawn_velocity);
        self.intersections = [Intersection::default(); EDGE_COUNT];
        self.phase = SimPhase::Running;
        self.events.push(SimEvent::Respawned);
        log::info!("Ball respawned at {:?}", self.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = PhysicsState::new(Settings::default());
        assert_eq!(state.ball_position(), DVec2::new(0.2, 0.0));
        assert!(state.ball_velocity().y < 0.0);
        assert_eq!(state.paddle_positions(), [0.0; EDGE_COUNT]);
        assert_eq!(state.phase(), SimPhase::Running);
        assert!(state.intersections().iter().all(|its| !its.intersected));

        for edge in 0..EDGE_COUNT {
            assert!((state.wall(edge).length() - 1.0).abs() < 1e-12);
            assert_eq!(state.wall(edge).b, state.wall((edge + 1) % EDGE_COUNT).a);
        }
    }

    #[test]
    fn test_walls_follow_scale() {
        let settings = Settings {
            hex_scale: 2.0,
            ..Default::default()
        };
        let state = PhysicsState::new(settings);
        assert!((state.wall(3).length() - 2.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_edge_out_of_range_panics() {
        let state = PhysicsState::new(Settings::default());
        state.paddle(EDGE_COUNT);
    }

    #[test]
    fn test_try_new_rejects_invalid() {
        let settings = Settings {
            dt: 0.0,
            ..Default::default()
        };
        assert!(PhysicsState::try_new(settings).is_err());
    }

    #[test]
    fn test_reset_ball_jitter_is_seeded() {
        let settings = Settings {
            serve_jitter: 0.5,
            seed: 7,
            ..Default::default()
        };
        let mut a = PhysicsState::new(settings.clone());
        let mut b = PhysicsState::new(settings);
        a.reset_ball();
        b.reset_ball();

        assert_eq!(a.ball_velocity(), b.ball_velocity());
        assert!((a.ball_velocity().length() - a.settings().spawn_velocity.length()).abs() < 1e-12);
        assert_eq!(a.drain_events(), vec![SimEvent::Respawned]);
        assert!(a.events().is_empty());
    }

    #[test]
    fn test_reset_without_jitter_restores_spawn() {
        let mut state = PhysicsState::new(Settings::default());
        state.pos = DVec2::new(0.5, 0.5);
        state.phase = SimPhase::Halted;
        state.reset_ball();
        assert_eq!(state.ball_position(), state.settings().spawn_position);
        assert_eq!(state.ball_velocity(), state.settings().spawn_velocity);
        assert_eq!(state.phase(), SimPhase::Running);
    }
}
