//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable edge order (0..6) everywhere
//! - No rendering or platform dependencies

pub mod collision;
pub mod paddle;
pub mod player;
pub mod segment;
pub mod state;
pub mod tick;

pub use collision::{Contact, central_acceleration, classify, deflection, paddle_offset};
pub use paddle::{Movement, PaddleInput};
pub use player::{ManualInput, Player};
pub use segment::{Intersection, LineSegment};
pub use state::{PhysicsState, SimEvent, SimPhase};
pub use tick::{TickInput, step, tick};
