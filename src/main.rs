//! Hex Pong entry point
//!
//! Headless runner: seats AI players on every edge and logs what happens.
//!
//! Usage: `hex-pong [settings.json] [ticks]`

use hex_pong::Settings;
use hex_pong::consts::EDGE_COUNT;
use hex_pong::sim::{Player, PhysicsState, SimEvent, SimPhase, step};

const DEFAULT_TICKS: u64 = 10_000;

/// Tick count from the command line, defaulting when absent
fn parse_ticks(arg: Option<&str>) -> Result<u64, std::num::ParseIntError> {
    arg.map_or(Ok(DEFAULT_TICKS), str::parse)
}

fn main() {
    env_logger::init();
    log::info!("Hex Pong (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{path}: {e}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    let ticks = match parse_ticks(args.next().as_deref()) {
        Ok(ticks) => ticks,
        Err(e) => {
            log::error!("invalid tick count: {e}");
            std::process::exit(1);
        }
    };

    let mut players = [Player::Predictive; EDGE_COUNT];
    players[0] = Player::Aggressive;

    let mut state = PhysicsState::new(settings);
    let mut hits = [0u32; EDGE_COUNT];

    for _ in 0..ticks {
        step(&mut state, &players);
        for event in state.drain_events() {
            match event {
                SimEvent::PaddleHit { edge, .. } => hits[edge] += 1,
                SimEvent::Lost { edge, point } => {
                    log::info!("tick {}: edge {edge} lost at {point:?}", state.time_ticks())
                }
                SimEvent::Respawned | SimEvent::Halted { .. } => {}
            }
        }
        if state.phase() == SimPhase::Halted {
            break;
        }
    }

    println!("ticks: {}", state.time_ticks());
    for edge in 0..EDGE_COUNT {
        println!(
            "edge {edge} ({:>10}): {:>5} hits, {:>3} losses",
            players[edge].name(),
            hits[edge],
            state.losses()[edge]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ticks() {
        assert_eq!(parse_ticks(None), Ok(DEFAULT_TICKS));
        assert_eq!(parse_ticks(Some("250")), Ok(250));
        assert!(parse_ticks(Some("10k")).is_err());
        assert!(parse_ticks(Some("-5")).is_err());
    }
}
