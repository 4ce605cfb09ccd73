//! Star Hopper entry point
//!
//! Runs a short scripted session against the headless core and logs every
//! directive the frontend collaborators would execute. Doubles as a smoke
//! run and as a reference for wiring a real frontend.

use star_hopper::sim::{
    CollisionEvent, GamePhase, MoveIntent, SessionState, TickInput, session_start, tick,
};

fn main() {
    env_logger::init();
    log::info!("Star Hopper (headless) starting...");

    let mut state = SessionState::new(42);
    for directive in session_start(&state) {
        log::info!("start: {:?}", directive);
    }

    // Run right, hop, grab two collectibles, then walk into the hazard the
    // second pickup provoked, and finally tap to restart.
    let script = vec![
        TickInput {
            move_intent: MoveIntent::Right,
            grounded: true,
            player_x: 100.0,
            ..Default::default()
        },
        TickInput {
            move_intent: MoveIntent::Right,
            jump: true,
            grounded: true,
            player_x: 120.0,
            ..Default::default()
        },
        TickInput {
            grounded: true,
            player_x: 150.0,
            collisions: vec![CollisionEvent::CollectibleOverlap { slot: 0 }],
            ..Default::default()
        },
        TickInput {
            move_intent: MoveIntent::Right,
            grounded: true,
            player_x: 500.0,
            collisions: vec![CollisionEvent::CollectibleOverlap { slot: 6 }],
            ..Default::default()
        },
        TickInput {
            grounded: true,
            player_x: 520.0,
            collisions: vec![CollisionEvent::HazardContact { hazard_id: 1 }],
            ..Default::default()
        },
        TickInput {
            pointer: true,
            ..Default::default()
        },
    ];

    for (frame, input) in script.iter().enumerate() {
        for directive in tick(&mut state, input) {
            log::info!("frame {}: {:?}", frame, directive);
        }
    }

    assert_eq!(state.phase, GamePhase::GameOver);
    log::info!(
        "session ended: score={} hazards={} ticks={}",
        state.score(),
        state.hazard_count(),
        state.time_ticks
    );
}
