#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Cave Hunt session.

mod builder;
mod console;
mod random;
mod translator;

use anyhow::Result as AnyResult;
use cave_hunt_core::GameOptions;
use cave_hunt_game::Game;
use cave_hunt_presentation::CaveDisplay;
use cave_hunt_world::GameState;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;

use builder::build_cave;
use console::ConsoleDisplay;
use random::ChaChaSource;
use translator::ConsoleTranslator;

/// ChaCha stream reserved for gameplay draws; stream zero builds the cave.
const GAMEPLAY_STREAM: u64 = 1;

/// Hunt a predator through a hazard-filled cave.
#[derive(Debug, Parser)]
#[command(name = "cave-hunt")]
struct Options {
    /// Number of rooms in the cave.
    #[arg(long, default_value_t = 20)]
    rooms: u32,

    /// Number of tunnels leading from each room.
    #[arg(long, default_value_t = 3)]
    tunnels: u32,

    /// Number of rooms infested by giant bats.
    #[arg(long, default_value_t = 3)]
    bats: u32,

    /// Number of rooms containing a bottomless pit.
    #[arg(long, default_value_t = 3)]
    pits: u32,

    /// Number of arrows in the player's quiver.
    #[arg(long, default_value_t = 5)]
    arrows: u32,

    /// Seed for reproducible caves and hunts.
    #[arg(long)]
    seed: Option<u64>,
}

impl Options {
    fn game_options(&self) -> GameOptions {
        GameOptions::new(self.rooms, self.tunnels, self.bats, self.pits, self.arrows)
    }
}

fn main() -> AnyResult<()> {
    let options = Options::parse();
    let game_options = options.game_options();
    let seed = options.seed.unwrap_or_else(rand::random);

    let mut build_rng = ChaCha8Rng::seed_from_u64(seed);
    let cave = build_cave(&game_options, &mut build_rng)?;

    let mut gameplay_rng = ChaCha8Rng::seed_from_u64(seed);
    gameplay_rng.set_stream(GAMEPLAY_STREAM);
    let mut rng = ChaChaSource::new(gameplay_rng);

    let mut display = ConsoleDisplay::new(io::stdout());
    let mut translator = ConsoleTranslator::new(io::stdin().lock(), io::stdout());

    display.show_introduction(&game_options)?;

    let mut game = Game::new(GameState::new(cave, game_options.arrows()));
    game.run(&mut translator, &mut display, &mut rng)
}
