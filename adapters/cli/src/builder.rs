//! Random cave construction for the command-line adapter.

use cave_hunt_core::{GameOptions, RoomId};
use cave_hunt_world::{Cave, Room};
use rand::Rng;
use thiserror::Error;

/// Smallest cave the builder will lay out. The connectivity ring needs at
/// least three rooms to stay free of duplicate tunnels, and the hazards
/// need rooms beyond the starting one to land in.
const MIN_ROOMS: u32 = 4;

/// Upper bound on rejected chord samples before the builder settles for the
/// degree the ring already provides.
const MAX_CHORD_ATTEMPTS: u32 = 1_000;

/// Reasons a cave layout request cannot be satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub(crate) enum CaveBuildError {
    /// The requested room count is below the supported minimum.
    #[error("a cave needs at least 4 rooms, got {rooms}")]
    TooFewRooms {
        /// Number of rooms requested.
        rooms: u32,
    },
    /// The requested degree cannot be met by the requested room count.
    #[error("{tunnels} tunnels per room is not achievable with {rooms} rooms")]
    TooManyTunnels {
        /// Number of tunnels requested per room.
        tunnels: u32,
        /// Number of rooms requested.
        rooms: u32,
    },
    /// More hazards were requested than rooms that may hold them.
    #[error("{hazards} hazards do not fit into {rooms} rooms with a safe start")]
    TooManyHazards {
        /// Total hazards requested, the predator included.
        hazards: u32,
        /// Number of rooms requested.
        rooms: u32,
    },
}

/// Lays out a random cave honoring the provided parameters.
///
/// Rooms carry dense identifiers `1..=rooms` as the relocation draw
/// requires. A ring over all rooms guarantees connectivity and symmetric
/// adjacency; random chords then raise each room's degree toward the
/// requested tunnel count. Pits, bats, and exactly one predator land on
/// distinct rooms, never the starting room.
pub(crate) fn build_cave(options: &GameOptions, rng: &mut impl Rng) -> Result<Cave, CaveBuildError> {
    validate(options)?;

    let count = options.rooms() as usize;
    let mut rooms: Vec<Room> = (1..=options.rooms())
        .map(|number| Room::new(RoomId::new(number)))
        .collect();

    for index in 0..count {
        let next = (index + 1) % count;
        if !rooms[index].has_neighbor(rooms[next].number()) {
            link(&mut rooms, index, next);
        }
    }

    carve_chords(&mut rooms, options.tunnels_per_room() as usize, rng);
    place_hazards(&mut rooms, options, rng);

    Ok(Cave::new(rooms))
}

fn validate(options: &GameOptions) -> Result<(), CaveBuildError> {
    let rooms = options.rooms();
    let tunnels = options.tunnels_per_room();

    if rooms < MIN_ROOMS {
        return Err(CaveBuildError::TooFewRooms { rooms });
    }
    if tunnels < 2 || tunnels >= rooms {
        return Err(CaveBuildError::TooManyTunnels { tunnels, rooms });
    }

    let hazards = options.pits() + options.bats() + 1;
    if hazards >= rooms {
        return Err(CaveBuildError::TooManyHazards { hazards, rooms });
    }

    Ok(())
}

fn carve_chords(rooms: &mut [Room], desired: usize, rng: &mut impl Rng) {
    let mut attempts = 0;
    while attempts < MAX_CHORD_ATTEMPTS {
        let open: Vec<usize> = rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| room.neighbors().len() < desired)
            .map(|(index, _)| index)
            .collect();
        if open.len() < 2 {
            break;
        }

        let first = open[rng.gen_range(0..open.len())];
        let second = open[rng.gen_range(0..open.len())];
        if first == second || rooms[first].has_neighbor(rooms[second].number()) {
            attempts += 1;
            continue;
        }

        link(rooms, first, second);
    }
}

fn place_hazards(rooms: &mut [Room], options: &GameOptions, rng: &mut impl Rng) {
    // Index 0 is the starting room and stays hazard-free.
    let mut candidates: Vec<usize> = (1..rooms.len()).collect();

    for _ in 0..options.pits() {
        let index = take_random(&mut candidates, rng);
        rooms[index].set_pit(true);
    }
    for _ in 0..options.bats() {
        let index = take_random(&mut candidates, rng);
        rooms[index].set_bats(true);
    }
    let lair = take_random(&mut candidates, rng);
    rooms[lair].set_predator(true);
}

fn take_random(candidates: &mut Vec<usize>, rng: &mut impl Rng) -> usize {
    debug_assert!(!candidates.is_empty(), "take_random requires candidates");
    let index = rng.gen_range(0..candidates.len());
    candidates.swap_remove(index)
}

fn link(rooms: &mut [Room], first: usize, second: usize) {
    debug_assert!(first != second, "link requires distinct rooms");
    let (low, high) = if first < second {
        (first, second)
    } else {
        (second, first)
    };
    let (head, tail) = rooms.split_at_mut(high);
    let near = &mut head[low];
    let far = &mut tail[0];
    near.add_neighbor(far.number());
    far.add_neighbor(near.number());
}
