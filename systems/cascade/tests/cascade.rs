use cave_hunt_core::{GameEvent, RandomSource, RoomId};
use cave_hunt_system_cascade::{resolve, CascadeOutcome};
use cave_hunt_world::{Cave, Room};

struct ScriptedRandom {
    draws: Vec<u32>,
}

impl ScriptedRandom {
    fn new(draws: &[u32]) -> Self {
        let mut draws = draws.to_vec();
        draws.reverse();
        Self { draws }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, _low: u32, _high: u32) -> u32 {
        self.draws.pop().expect("scripted draws exhausted")
    }
}

fn move_to(target: u32) -> GameEvent {
    GameEvent::MoveToRoom {
        target: RoomId::new(target),
    }
}

#[test]
fn wall_hit_resolves_in_two_events_and_the_hunt_continues() {
    let mut cave = Cave::new(vec![Room::new(RoomId::new(1))]);
    let mut rng = ScriptedRandom::new(&[]);
    let mut events = Vec::new();

    let outcome = resolve(move_to(9), &mut cave, &mut rng, &mut events);

    assert_eq!(outcome, CascadeOutcome::TurnEnded);
    assert_eq!(events, vec![move_to(9), GameEvent::HitWall]);
    assert_eq!(cave.current_room().number(), RoomId::new(1));
}

#[test]
fn walking_into_a_plain_room_goes_idle() {
    let mut first = Room::new(RoomId::new(1));
    first.add_neighbor(RoomId::new(2));
    let mut cave = Cave::new(vec![first, Room::new(RoomId::new(2))]);
    let mut rng = ScriptedRandom::new(&[]);
    let mut events = Vec::new();

    let outcome = resolve(move_to(2), &mut cave, &mut rng, &mut events);

    assert_eq!(outcome, CascadeOutcome::TurnEnded);
    assert_eq!(
        events,
        vec![move_to(2), GameEvent::EnteredRoom, GameEvent::Idle]
    );
    assert_eq!(cave.current_room().number(), RoomId::new(2));
}

#[test]
fn walking_into_a_pit_room_with_a_losing_draw_ends_the_hunt() {
    // Sparse identifiers on purpose: the pit cascade never draws for a
    // relocation, so the dense-range obligation does not apply here.
    let mut start = Room::new(RoomId::new(10));
    start.add_neighbor(RoomId::new(12));
    let mut pit_room = Room::new(RoomId::new(12));
    pit_room.add_neighbor(RoomId::new(10));
    pit_room.set_pit(true);
    let rooms = vec![
        start,
        pit_room,
        Room::new(RoomId::new(13)),
        Room::new(RoomId::new(14)),
    ];
    let mut cave = Cave::new(rooms);
    let mut rng = ScriptedRandom::new(&[1]);
    let mut events = Vec::new();

    let outcome = resolve(move_to(12), &mut cave, &mut rng, &mut events);

    assert_eq!(outcome, CascadeOutcome::GameOver);
    assert_eq!(
        events,
        vec![
            move_to(12),
            GameEvent::EnteredRoom,
            GameEvent::EnteredPitRoom,
            GameEvent::FellInPit,
            GameEvent::GameOver,
        ]
    );
}

#[test]
fn a_winning_draw_survives_the_pit_and_the_hunt_continues() {
    let mut start = Room::new(RoomId::new(1));
    start.add_neighbor(RoomId::new(2));
    let mut pit_room = Room::new(RoomId::new(2));
    pit_room.set_pit(true);
    let mut cave = Cave::new(vec![start, pit_room]);
    let mut rng = ScriptedRandom::new(&[0]);
    let mut events = Vec::new();

    let outcome = resolve(move_to(2), &mut cave, &mut rng, &mut events);

    assert_eq!(outcome, CascadeOutcome::TurnEnded);
    assert_eq!(
        events,
        vec![
            move_to(2),
            GameEvent::EnteredRoom,
            GameEvent::EnteredPitRoom,
            GameEvent::SurvivedPit,
        ]
    );
}

#[test]
fn chained_bat_teleports_record_every_intermediate_event() {
    // Room 2 and room 3 both hold bats; the first relocation draw lands on
    // room 3, the second on room 4, which is plain.
    let mut rooms: Vec<Room> = (1..=4).map(|n| Room::new(RoomId::new(n))).collect();
    rooms[0].add_neighbor(RoomId::new(2));
    rooms[1].set_bats(true);
    rooms[2].set_bats(true);
    let mut cave = Cave::new(rooms);
    let mut rng = ScriptedRandom::new(&[3, 4]);
    let mut events = Vec::new();

    let outcome = resolve(move_to(2), &mut cave, &mut rng, &mut events);

    assert_eq!(outcome, CascadeOutcome::TurnEnded);
    assert_eq!(
        events,
        vec![
            move_to(2),
            GameEvent::EnteredRoom,
            GameEvent::MovedByBats,
            GameEvent::EnteredRoom,
            GameEvent::MovedByBats,
            GameEvent::EnteredRoom,
            GameEvent::Idle,
        ]
    );
    assert_eq!(cave.current_room().number(), RoomId::new(4));
}

#[test]
fn bats_can_drop_the_player_into_a_pit() {
    let mut rooms: Vec<Room> = (1..=3).map(|n| Room::new(RoomId::new(n))).collect();
    rooms[0].add_neighbor(RoomId::new(2));
    rooms[1].set_bats(true);
    rooms[2].set_pit(true);
    let mut cave = Cave::new(rooms);
    let mut rng = ScriptedRandom::new(&[3, 4]);
    let mut events = Vec::new();

    let outcome = resolve(move_to(2), &mut cave, &mut rng, &mut events);

    assert_eq!(outcome, CascadeOutcome::GameOver);
    assert_eq!(
        events,
        vec![
            move_to(2),
            GameEvent::EnteredRoom,
            GameEvent::MovedByBats,
            GameEvent::EnteredRoom,
            GameEvent::EnteredPitRoom,
            GameEvent::FellInPit,
            GameEvent::GameOver,
        ]
    );
}

#[test]
fn resolving_from_game_over_stops_immediately() {
    let mut cave = Cave::new(vec![Room::new(RoomId::new(1))]);
    let mut rng = ScriptedRandom::new(&[]);
    let mut events = Vec::new();

    let outcome = resolve(GameEvent::GameOver, &mut cave, &mut rng, &mut events);

    assert_eq!(outcome, CascadeOutcome::GameOver);
    assert_eq!(events, vec![GameEvent::GameOver]);
}
