#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Player actions and the hunt loop for Cave Hunt.
//!
//! A [`PlayerAction`] drives one turn: it resolves the event cascade against
//! the cave, hands every recorded event to the narrator, and reports whether
//! the hunt continues. [`Game`] strings turns together until an action ends
//! the hunt.

use anyhow::Result as AnyResult;
use cave_hunt_core::{Command, GameEvent, RandomSource, RoomId};
use cave_hunt_presentation::{ActionTranslator, CaveDisplay, EventNarrator};
use cave_hunt_system_cascade::{resolve, CascadeOutcome};
use cave_hunt_world::{query, GameState};

/// An operation the player can invoke on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    /// Walk into the identified room.
    Move {
        /// Room the player wants to enter.
        target: RoomId,
    },
    /// End the hunt immediately.
    Quit,
}

impl PlayerAction {
    /// Builds the action a command asks for.
    ///
    /// `Shoot` has no defined resolution rules yet and maps to `None`; the
    /// game loop treats an unmapped command as a request to re-prompt.
    #[must_use]
    pub fn from_command(command: &Command) -> Option<Self> {
        match command {
            Command::Move { room } => Some(Self::Move { target: *room }),
            Command::Quit => Some(Self::Quit),
            Command::Shoot { .. } => None,
        }
    }

    /// Performs the action, narrating every event of the resulting cascade.
    ///
    /// Returns `Ok(true)` while the hunt should continue and `Ok(false)`
    /// once this action has ended it.
    pub fn perform(
        &self,
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        narrator: &mut EventNarrator,
        display: &mut dyn CaveDisplay,
    ) -> AnyResult<bool> {
        match self {
            Self::Quit => Ok(false),
            Self::Move { target } => {
                let mut events = Vec::new();
                let outcome = resolve(
                    GameEvent::MoveToRoom { target: *target },
                    state.cave_mut(),
                    rng,
                    &mut events,
                );
                for event in events {
                    narrator.narrate(event, display)?;
                }
                Ok(outcome == CascadeOutcome::TurnEnded)
            }
        }
    }
}

/// Orchestrates the hunt from the first state display to the final turn.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    narrator: EventNarrator,
}

impl Game {
    /// Creates a game around the provided initial state.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            narrator: EventNarrator::new(),
        }
    }

    /// Runs the hunt until an action reports that it is over.
    ///
    /// Each iteration describes the player's surroundings, requests exactly
    /// one command, and performs the resulting action. Commands that map to
    /// no action re-prompt without consuming a turn.
    pub fn run(
        &mut self,
        translator: &mut dyn ActionTranslator,
        display: &mut dyn CaveDisplay,
        rng: &mut dyn RandomSource,
    ) -> AnyResult<()> {
        loop {
            let view = query::room_view(self.state.cave());
            self.narrator
                .describe_state(&view, self.state.arrows(), display)?;

            let command = translator.next_command()?;
            let Some(action) = PlayerAction::from_command(&command) else {
                continue;
            };

            if !action.perform(&mut self.state, rng, &mut self.narrator, display)? {
                return Ok(());
            }
        }
    }
}
