#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Cave Hunt engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative cave state, and the turn-resolution cascade. Translators
//! produce [`Command`] values describing player intent, the cascade system
//! resolves each turn into a sequence of [`GameEvent`] values, and the
//! presentation layer consumes those events to narrate the hunt.

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the hunt begins.
pub const WELCOME_BANNER: &str = "Welcome to Cave Hunt.";

/// Unique identifier assigned to a room in the cave.
///
/// Identifiers are externally assigned and assumed to be at least 1. Random
/// relocation additionally assumes they form a dense `1..=room_count` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(u32);

impl RoomId {
    /// Creates a new room identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Commands that express all player intents accepted at the boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Requests that the player walk into the identified room.
    Move {
        /// Room the player wants to enter.
        room: RoomId,
    },
    /// Requests that the player shoot an arrow along a path of rooms.
    Shoot {
        /// Rooms the arrow should visit, nearest first.
        path: Vec<RoomId>,
    },
    /// Requests that the current hunt end immediately.
    Quit,
}

/// One step of turn resolution.
///
/// Events are transient values created fresh on every cascade step and
/// discarded once the presentation layer has consumed them. Each variant
/// carries only the data its own effect and narration require.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The player attempts to walk into the identified room.
    MoveToRoom {
        /// Room the player is trying to enter.
        target: RoomId,
    },
    /// The player occupies a new room and its hazards must be evaluated.
    EnteredRoom,
    /// The attempted move named a room with no connecting tunnel.
    HitWall,
    /// The player stands in a room containing a pit.
    EnteredPitRoom,
    /// The player clambered out of the pit unharmed.
    SurvivedPit,
    /// The player fell to the bottom of the pit.
    FellInPit,
    /// Giant bats carried the player to a random room.
    MovedByBats,
    /// Nothing further happens; the turn ends and the hunt continues.
    Idle,
    /// The hunt is over.
    GameOver,
}

/// Uniform-integer randomness capability injected into the engine.
///
/// Implementations are passed explicitly wherever a draw is needed, which
/// keeps cascades deterministic under scripted sources in tests.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in the inclusive range
    /// `low..=high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Parameters that shape a hunt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    rooms: u32,
    tunnels_per_room: u32,
    bats: u32,
    pits: u32,
    arrows: u32,
}

impl GameOptions {
    /// Creates a new set of hunt parameters.
    #[must_use]
    pub const fn new(rooms: u32, tunnels_per_room: u32, bats: u32, pits: u32, arrows: u32) -> Self {
        Self {
            rooms,
            tunnels_per_room,
            bats,
            pits,
            arrows,
        }
    }

    /// Number of rooms in the cave.
    #[must_use]
    pub const fn rooms(&self) -> u32 {
        self.rooms
    }

    /// Number of tunnels leading out of each room.
    #[must_use]
    pub const fn tunnels_per_room(&self) -> u32 {
        self.tunnels_per_room
    }

    /// Number of rooms infested by giant bats.
    #[must_use]
    pub const fn bats(&self) -> u32 {
        self.bats
    }

    /// Number of rooms containing a bottomless pit.
    #[must_use]
    pub const fn pits(&self) -> u32 {
        self.pits
    }

    /// Number of arrows in the player's quiver at the start of the hunt.
    #[must_use]
    pub const fn arrows(&self) -> u32 {
        self.arrows
    }
}

/// Read-only snapshot of the player's surroundings for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomView {
    /// Room the player currently occupies.
    pub room: RoomId,
    /// Identifiers of connected rooms in ascending order.
    pub neighbors: Vec<RoomId>,
    /// Whether a neighboring room contains a pit.
    pub pit_nearby: bool,
    /// Whether a neighboring room is infested by bats.
    pub bats_nearby: bool,
    /// Whether the predator lurks in a neighboring room.
    pub predator_nearby: bool,
}
