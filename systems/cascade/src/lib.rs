#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Turn-resolution cascade for Cave Hunt.
//!
//! A turn starts from the event a player action constructs and resolves
//! through a closed set of transitions: each [`advance`] call applies one
//! event's effect to the cave and yields the next event, and [`resolve`]
//! drives the chain to quiescence with an explicit loop so that stack usage
//! stays flat no matter how many times the bats relocate the player.

use cave_hunt_core::{GameEvent, RandomSource};
use cave_hunt_world::Cave;

/// Inclusive upper bound of the pit-survival draw; six equally likely
/// outcomes in `0..=5`.
const PIT_DRAW_MAX: u32 = 5;
/// The single draw value that lets the player clamber out of a pit.
const PIT_SURVIVAL_DRAW: u32 = 0;

/// How a fully resolved cascade left the hunt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CascadeOutcome {
    /// The turn ended on a quiescent event; the hunt continues.
    TurnEnded,
    /// The cascade reached the terminal event; the hunt is over.
    GameOver,
}

/// Applies one event's effect to the cave and yields the next event.
///
/// Returns `None` after a quiescent event (`HitWall`, `Idle`,
/// `SurvivedPit`): the turn is over but the hunt continues. `GameOver` is
/// absorbing and yields itself.
pub fn advance(
    event: GameEvent,
    cave: &mut Cave,
    rng: &mut dyn RandomSource,
) -> Option<GameEvent> {
    match event {
        GameEvent::MoveToRoom { target } => {
            if cave.adjacent_room(target) {
                cave.move_to(target);
                Some(GameEvent::EnteredRoom)
            } else {
                Some(GameEvent::HitWall)
            }
        }
        GameEvent::EnteredRoom => {
            // Pit takes priority when a room carries both hazards.
            let room = cave.current_room();
            if room.has_pit() {
                Some(GameEvent::EnteredPitRoom)
            } else if room.has_bats() {
                Some(GameEvent::MovedByBats)
            } else {
                Some(GameEvent::Idle)
            }
        }
        GameEvent::EnteredPitRoom => {
            if rng.next_in_range(0, PIT_DRAW_MAX) == PIT_SURVIVAL_DRAW {
                Some(GameEvent::SurvivedPit)
            } else {
                Some(GameEvent::FellInPit)
            }
        }
        GameEvent::FellInPit => Some(GameEvent::GameOver),
        GameEvent::MovedByBats => {
            cave.move_player_to_random_room(rng);
            Some(GameEvent::EnteredRoom)
        }
        GameEvent::HitWall | GameEvent::Idle | GameEvent::SurvivedPit => None,
        GameEvent::GameOver => Some(GameEvent::GameOver),
    }
}

/// Drives a cascade from its initial event until it goes quiescent or the
/// hunt ends.
///
/// Every event along the chain, the initial and terminal ones included, is
/// pushed into `out_events` so the presentation layer can observe each
/// intermediate step of a multi-event turn.
pub fn resolve(
    initial: GameEvent,
    cave: &mut Cave,
    rng: &mut dyn RandomSource,
    out_events: &mut Vec<GameEvent>,
) -> CascadeOutcome {
    let mut event = initial;
    loop {
        out_events.push(event);
        if event == GameEvent::GameOver {
            return CascadeOutcome::GameOver;
        }
        match advance(event, cave, rng) {
            Some(next) => event = next,
            None => return CascadeOutcome::TurnEnded,
        }
    }
}
