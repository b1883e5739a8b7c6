#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative cave state for Cave Hunt.
//!
//! The cave is the one piece of mutable shared state in the engine. It is
//! mutated exclusively by the currently-resolving turn cascade; adapters and
//! the presentation layer observe it through the read-only [`query`] module.

use cave_hunt_core::{RandomSource, RoomId};

/// A node in the cave graph.
///
/// Rooms hold their hazard flags and a neighbor list kept sorted ascending
/// by identifier. Adjacency symmetry is an obligation of whichever party
/// builds the graph; a room never enforces that its neighbors list it back.
/// Neighbors and hazard flags are mutated only during cave construction.
#[derive(Clone, Debug)]
pub struct Room {
    number: RoomId,
    neighbors: Vec<RoomId>,
    pit: bool,
    bats: bool,
    predator: bool,
}

impl Room {
    /// Creates a new hazard-free room with no tunnels.
    #[must_use]
    pub const fn new(number: RoomId) -> Self {
        Self {
            number,
            neighbors: Vec::new(),
            pit: false,
            bats: false,
            predator: false,
        }
    }

    /// Identifier assigned to this room.
    #[must_use]
    pub const fn number(&self) -> RoomId {
        self.number
    }

    /// Identifiers of connected rooms in ascending order.
    #[must_use]
    pub fn neighbors(&self) -> &[RoomId] {
        &self.neighbors
    }

    /// Declares a tunnel to the identified room, preserving ascending order.
    ///
    /// Insertion is positional and performs no duplicate rejection; callers
    /// that may revisit a pair should consult [`Room::has_neighbor`] first.
    pub fn add_neighbor(&mut self, neighbor: RoomId) {
        let index = self.neighbors.partition_point(|room| *room < neighbor);
        self.neighbors.insert(index, neighbor);
    }

    /// Returns true if a tunnel to the identified room has been declared.
    #[must_use]
    pub fn has_neighbor(&self, room: RoomId) -> bool {
        self.neighbors.binary_search(&room).is_ok()
    }

    /// Sets whether the room contains a bottomless pit.
    pub fn set_pit(&mut self, pit: bool) {
        self.pit = pit;
    }

    /// Returns true if the room contains a bottomless pit.
    #[must_use]
    pub const fn has_pit(&self) -> bool {
        self.pit
    }

    /// Sets whether the room is infested by giant bats.
    pub fn set_bats(&mut self, bats: bool) {
        self.bats = bats;
    }

    /// Returns true if the room is infested by giant bats.
    #[must_use]
    pub const fn has_bats(&self) -> bool {
        self.bats
    }

    /// Sets whether the predator lurks in the room.
    pub fn set_predator(&mut self, predator: bool) {
        self.predator = predator;
    }

    /// Returns true if the predator lurks in the room.
    #[must_use]
    pub const fn has_predator(&self) -> bool {
        self.predator
    }
}

/// The room graph plus the player's current position within it.
#[derive(Clone, Debug)]
pub struct Cave {
    rooms: Vec<Room>,
    current: usize,
}

impl Cave {
    /// Creates a cave from a finite, non-empty room list.
    ///
    /// The player starts in the first room of the list.
    #[must_use]
    pub fn new(rooms: Vec<Room>) -> Self {
        debug_assert!(!rooms.is_empty(), "a cave requires at least one room");
        Self { rooms, current: 0 }
    }

    /// Room the player currently occupies.
    #[must_use]
    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current]
    }

    /// Returns true if the identified room connects to the current one.
    #[must_use]
    pub fn adjacent_room(&self, room: RoomId) -> bool {
        self.current_room().has_neighbor(room)
    }

    /// Relocates the player to the identified room.
    ///
    /// Unknown identifiers leave the player in place. This is a deliberate
    /// permissive policy rather than an error: callers are expected to have
    /// validated adjacency through [`Cave::adjacent_room`] first.
    pub fn move_to(&mut self, room: RoomId) {
        if let Some(index) = self.room_index(room) {
            self.current = index;
        }
    }

    /// Relocates the player to a uniformly drawn room.
    ///
    /// The draw covers the inclusive range `1..=room_count` and may land on
    /// the room the player already occupies. Every draw names a real room
    /// only when identifiers form a dense range starting at 1; keeping them
    /// dense is an obligation of the cave builder.
    pub fn move_player_to_random_room(&mut self, rng: &mut dyn RandomSource) {
        let target = rng.next_in_range(1, self.rooms.len() as u32);
        self.move_to(RoomId::new(target));
    }

    /// Looks up a room by identifier.
    #[must_use]
    pub fn room(&self, room: RoomId) -> Option<&Room> {
        self.room_index(room).map(|index| &self.rooms[index])
    }

    /// Number of rooms in the cave.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    fn room_index(&self, room: RoomId) -> Option<usize> {
        self.rooms.iter().position(|candidate| candidate.number() == room)
    }
}

/// The cave paired with the player's remaining resources.
#[derive(Clone, Debug)]
pub struct GameState {
    cave: Cave,
    arrows: u32,
}

impl GameState {
    /// Creates a new game state with a full quiver.
    #[must_use]
    pub const fn new(cave: Cave, arrows: u32) -> Self {
        Self { cave, arrows }
    }

    /// Read-only access to the cave.
    #[must_use]
    pub const fn cave(&self) -> &Cave {
        &self.cave
    }

    /// Mutable access to the cave for the currently-resolving cascade.
    #[must_use]
    pub fn cave_mut(&mut self) -> &mut Cave {
        &mut self.cave
    }

    /// Number of arrows remaining in the player's quiver.
    #[must_use]
    pub const fn arrows(&self) -> u32 {
        self.arrows
    }
}

/// Read-only queries over the cave for adapters and presentation.
pub mod query {
    use super::{Cave, Room};
    use cave_hunt_core::RoomView;

    /// Captures a presentation snapshot of the player's surroundings.
    ///
    /// Proximity flags report hazards in rooms connected to the current one,
    /// never hazards in the current room itself.
    #[must_use]
    pub fn room_view(cave: &Cave) -> RoomView {
        let current = cave.current_room();
        RoomView {
            room: current.number(),
            neighbors: current.neighbors().to_vec(),
            pit_nearby: hazard_nearby(cave, current, Room::has_pit),
            bats_nearby: hazard_nearby(cave, current, Room::has_bats),
            predator_nearby: hazard_nearby(cave, current, Room::has_predator),
        }
    }

    /// Number of rooms in the cave.
    #[must_use]
    pub fn room_count(cave: &Cave) -> usize {
        cave.room_count()
    }

    fn hazard_nearby(cave: &Cave, room: &Room, hazard: fn(&Room) -> bool) -> bool {
        room.neighbors()
            .iter()
            .any(|neighbor| cave.room(*neighbor).map_or(false, hazard))
    }
}

#[cfg(test)]
mod tests {
    use super::{query, Cave, GameState, Room};
    use cave_hunt_core::{RandomSource, RoomId};

    struct ScriptedRandom {
        draws: Vec<u32>,
        calls: Vec<(u32, u32)>,
    }

    impl ScriptedRandom {
        fn new(draws: &[u32]) -> Self {
            let mut draws = draws.to_vec();
            draws.reverse();
            Self {
                draws,
                calls: Vec::new(),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
            self.calls.push((low, high));
            self.draws.pop().expect("scripted draws exhausted")
        }
    }

    fn dense_cave(count: u32) -> Cave {
        let rooms = (1..=count).map(|n| Room::new(RoomId::new(n))).collect();
        Cave::new(rooms)
    }

    #[test]
    fn neighbors_are_kept_sorted_ascending() {
        let mut room = Room::new(RoomId::new(1));
        room.add_neighbor(RoomId::new(7));
        room.add_neighbor(RoomId::new(2));
        room.add_neighbor(RoomId::new(5));

        let numbers: Vec<u32> = room.neighbors().iter().map(RoomId::get).collect();
        assert_eq!(numbers, vec![2, 5, 7]);
    }

    #[test]
    fn has_neighbor_reports_declared_tunnels() {
        let mut room = Room::new(RoomId::new(1));
        room.add_neighbor(RoomId::new(4));

        assert!(room.has_neighbor(RoomId::new(4)));
        assert!(!room.has_neighbor(RoomId::new(5)));
    }

    #[test]
    fn player_starts_in_the_first_room() {
        let cave = dense_cave(4);
        assert_eq!(cave.current_room().number(), RoomId::new(1));
    }

    #[test]
    fn move_relocates_to_a_known_room() {
        let mut cave = dense_cave(4);
        cave.move_to(RoomId::new(3));
        assert_eq!(cave.current_room().number(), RoomId::new(3));
    }

    #[test]
    fn move_ignores_an_unknown_room() {
        let mut cave = dense_cave(4);
        cave.move_to(RoomId::new(9));
        assert_eq!(cave.current_room().number(), RoomId::new(1));
    }

    #[test]
    fn adjacency_follows_the_current_room() {
        let mut rooms = vec![Room::new(RoomId::new(1)), Room::new(RoomId::new(2))];
        rooms[0].add_neighbor(RoomId::new(2));
        let cave = Cave::new(rooms);

        assert!(cave.adjacent_room(RoomId::new(2)));
        assert!(!cave.adjacent_room(RoomId::new(1)));
    }

    #[test]
    fn random_relocation_draws_over_the_full_room_range() {
        let mut cave = dense_cave(4);
        let mut rng = ScriptedRandom::new(&[4]);

        cave.move_player_to_random_room(&mut rng);

        assert_eq!(rng.calls, vec![(1, 4)]);
        assert_eq!(cave.current_room().number(), RoomId::new(4));
    }

    #[test]
    fn random_relocation_may_keep_the_player_in_place() {
        let mut cave = dense_cave(4);
        let mut rng = ScriptedRandom::new(&[1]);

        cave.move_player_to_random_room(&mut rng);

        assert_eq!(cave.current_room().number(), RoomId::new(1));
    }

    #[test]
    fn sparse_identifiers_can_swallow_a_relocation_draw() {
        // Identifier density is a builder obligation; with a sparse range a
        // draw can name a missing room and the player stays put.
        let rooms = vec![
            Room::new(RoomId::new(10)),
            Room::new(RoomId::new(12)),
            Room::new(RoomId::new(13)),
            Room::new(RoomId::new(14)),
        ];
        let mut cave = Cave::new(rooms);
        let mut rng = ScriptedRandom::new(&[2]);

        cave.move_player_to_random_room(&mut rng);

        assert_eq!(cave.current_room().number(), RoomId::new(10));
    }

    #[test]
    fn room_lookup_yields_none_for_unknown_identifiers() {
        let cave = dense_cave(4);
        assert!(cave.room(RoomId::new(9)).is_none());
    }

    #[test]
    fn room_view_reports_neighbors_and_proximity() {
        let mut rooms = vec![
            Room::new(RoomId::new(1)),
            Room::new(RoomId::new(2)),
            Room::new(RoomId::new(3)),
        ];
        rooms[0].add_neighbor(RoomId::new(3));
        rooms[0].add_neighbor(RoomId::new(2));
        rooms[1].set_pit(true);
        rooms[2].set_bats(true);
        let cave = Cave::new(rooms);

        let view = query::room_view(&cave);

        assert_eq!(view.room, RoomId::new(1));
        let numbers: Vec<u32> = view.neighbors.iter().map(RoomId::get).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert!(view.pit_nearby);
        assert!(view.bats_nearby);
        assert!(!view.predator_nearby);
    }

    #[test]
    fn room_view_ignores_hazards_in_the_current_room() {
        let mut rooms = vec![Room::new(RoomId::new(1)), Room::new(RoomId::new(2))];
        rooms[0].add_neighbor(RoomId::new(2));
        rooms[0].set_pit(true);
        let cave = Cave::new(rooms);

        let view = query::room_view(&cave);
        assert!(!view.pit_nearby);
    }

    #[test]
    fn game_state_tracks_remaining_arrows() {
        let state = GameState::new(dense_cave(4), 5);
        assert_eq!(state.arrows(), 5);
    }
}
