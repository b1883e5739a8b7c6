#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Cave Hunt adapters.
//!
//! Adapters implement [`CaveDisplay`] to render notifications and
//! [`ActionTranslator`] to turn raw player input into [`Command`] values.
//! The [`EventNarrator`] sits between the cascade and the display: it maps
//! each event to at most one notification and owns the narrative state that
//! spans consecutive events.

use anyhow::Result as AnyResult;
use cave_hunt_core::{Command, GameEvent, GameOptions, RoomView};

/// Notification sink implemented by every display backend.
///
/// Calls are synchronous; a failed write surfaces as an error to the game
/// loop rather than being swallowed.
pub trait CaveDisplay {
    /// Presents the introduction for a hunt with the provided parameters.
    fn show_introduction(&mut self, options: &GameOptions) -> AnyResult<()>;

    /// Presents the player's surroundings and remaining resources.
    fn show_game_state(&mut self, view: &RoomView, arrows: u32) -> AnyResult<()>;

    /// Tells the player they walked into a wall.
    fn show_player_hit_wall(&mut self) -> AnyResult<()>;

    /// Tells the player they escaped a pit.
    fn show_player_survived_pit(&mut self) -> AnyResult<()>;

    /// Tells the player they fell into a pit.
    fn show_player_fell_in_pit(&mut self) -> AnyResult<()>;

    /// Tells the player the bats carried them off.
    fn show_player_moved_by_bats(&mut self) -> AnyResult<()>;

    /// Tells the player the bats carried them off yet again.
    fn show_player_moved_by_bats_again(&mut self) -> AnyResult<()>;

    /// Tells the player the hunt has ended.
    fn show_game_over(&mut self) -> AnyResult<()>;
}

/// Source of the next player command.
///
/// The game loop issues one request at a time and the call may block until
/// the player answers; an unresolved request simply stalls the hunt, which
/// is acceptable for an interactive session.
pub trait ActionTranslator {
    /// Produces the next command entered by the player.
    fn next_command(&mut self) -> AnyResult<Command>;
}

/// Stateful translator from cascade events to display notifications.
///
/// The narrator carries a single piece of state across events: whether the
/// most recently narrated bat-move has not yet been followed by an idle
/// event. A repeated bat-move inside one streak is narrated as happening
/// "again"; an idle event closes the streak silently.
#[derive(Debug, Default)]
pub struct EventNarrator {
    moved_by_bats: bool,
}

impl EventNarrator {
    /// Creates a narrator with no bat streak in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            moved_by_bats: false,
        }
    }

    /// Presents the current game state unconditionally.
    pub fn describe_state(
        &self,
        view: &RoomView,
        arrows: u32,
        display: &mut dyn CaveDisplay,
    ) -> AnyResult<()> {
        display.show_game_state(view, arrows)
    }

    /// Maps one event to at most one notification.
    ///
    /// Structural events (`MoveToRoom`, `EnteredRoom`) produce nothing and
    /// leave the bat streak untouched.
    pub fn narrate(&mut self, event: GameEvent, display: &mut dyn CaveDisplay) -> AnyResult<()> {
        match event {
            GameEvent::MoveToRoom { .. } | GameEvent::EnteredRoom | GameEvent::EnteredPitRoom => {
                Ok(())
            }
            GameEvent::HitWall => display.show_player_hit_wall(),
            GameEvent::SurvivedPit => display.show_player_survived_pit(),
            GameEvent::FellInPit => display.show_player_fell_in_pit(),
            GameEvent::MovedByBats => {
                if self.moved_by_bats {
                    display.show_player_moved_by_bats_again()
                } else {
                    self.moved_by_bats = true;
                    display.show_player_moved_by_bats()
                }
            }
            GameEvent::Idle => {
                self.moved_by_bats = false;
                Ok(())
            }
            GameEvent::GameOver => display.show_game_over(),
        }
    }
}
