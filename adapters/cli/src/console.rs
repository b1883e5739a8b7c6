//! Console rendition of the Cave Hunt display contract.

use anyhow::Result as AnyResult;
use cave_hunt_core::{GameOptions, RoomId, RoomView, WELCOME_BANNER};
use cave_hunt_presentation::CaveDisplay;
use std::io::Write;

/// Display backend that writes one line per notification.
pub(crate) struct ConsoleDisplay<W: Write> {
    output: W,
}

impl<W: Write> ConsoleDisplay<W> {
    /// Creates a console display over the provided writer.
    pub(crate) fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> CaveDisplay for ConsoleDisplay<W> {
    fn show_introduction(&mut self, options: &GameOptions) -> AnyResult<()> {
        writeln!(self.output, "{}", WELCOME_BANNER)?;
        writeln!(
            self.output,
            "You're in a cave with {} rooms and {} tunnels leading from each room.",
            options.rooms(),
            options.tunnels_per_room(),
        )?;
        writeln!(
            self.output,
            "There are {} bat colonies and {} pits scattered throughout the cave,",
            options.bats(),
            options.pits(),
        )?;
        writeln!(
            self.output,
            "and your quiver holds {} arrows. Good luck.",
            options.arrows(),
        )?;
        Ok(())
    }

    fn show_game_state(&mut self, view: &RoomView, arrows: u32) -> AnyResult<()> {
        writeln!(
            self.output,
            "You are in room {} of the cave.",
            view.room.get()
        )?;
        if !view.neighbors.is_empty() {
            writeln!(
                self.output,
                "There are tunnels leading to rooms {}.",
                render_rooms(&view.neighbors)
            )?;
        }
        if view.pit_nearby {
            writeln!(self.output, "You feel a draft nearby.")?;
        }
        if view.bats_nearby {
            writeln!(self.output, "You hear flapping nearby.")?;
        }
        if view.predator_nearby {
            writeln!(self.output, "You smell something foul nearby.")?;
        }
        writeln!(self.output, "You have {} arrows remaining.", arrows)?;
        Ok(())
    }

    fn show_player_hit_wall(&mut self) -> AnyResult<()> {
        writeln!(self.output, "You bump into a wall. There is no tunnel there.")?;
        Ok(())
    }

    fn show_player_survived_pit(&mut self) -> AnyResult<()> {
        writeln!(
            self.output,
            "You fell into a pit and barely clambered back out!"
        )?;
        Ok(())
    }

    fn show_player_fell_in_pit(&mut self) -> AnyResult<()> {
        writeln!(self.output, "You fell into a bottomless pit!")?;
        Ok(())
    }

    fn show_player_moved_by_bats(&mut self) -> AnyResult<()> {
        writeln!(
            self.output,
            "Giant bats snatch you up and carry you to another room!"
        )?;
        Ok(())
    }

    fn show_player_moved_by_bats_again(&mut self) -> AnyResult<()> {
        writeln!(self.output, "The bats snatch you up yet again!")?;
        Ok(())
    }

    fn show_game_over(&mut self) -> AnyResult<()> {
        writeln!(self.output, "The hunt is over.")?;
        Ok(())
    }
}

fn render_rooms(rooms: &[RoomId]) -> String {
    let numbers: Vec<String> = rooms.iter().map(|room| room.get().to_string()).collect();
    numbers.join(", ")
}
