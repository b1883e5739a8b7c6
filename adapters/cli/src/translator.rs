//! Line-oriented action translation for the command-line adapter.

use anyhow::Result as AnyResult;
use cave_hunt_core::{Command, RoomId};
use cave_hunt_presentation::ActionTranslator;
use std::io::{BufRead, Write};

const USAGE_HINT: &str = "Commands: move <room>, shoot <room> [room...], quit";

/// Translator that prompts on one stream and reads commands from another.
///
/// Unparseable lines print a usage hint and re-prompt; end of input is
/// treated as a request to quit so a closed pipe ends the hunt cleanly.
pub(crate) struct ConsoleTranslator<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleTranslator<R, W> {
    /// Creates a translator over the provided input and prompt streams.
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ActionTranslator for ConsoleTranslator<R, W> {
    fn next_command(&mut self) -> AnyResult<Command> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Command::Quit);
            }
            if let Some(command) = parse_command(&line) {
                return Ok(command);
            }
            writeln!(self.output, "{}", USAGE_HINT)?;
        }
    }
}

/// Parses a single input line into a command.
///
/// Accepted forms: `move <room>` (`m`), `shoot <room> [room...]` (`s`), and
/// `quit` (`q`, `exit`). Matching is case-insensitive.
pub(crate) fn parse_command(line: &str) -> Option<Command> {
    let lowered = line.to_lowercase();
    let mut tokens = lowered.split_whitespace();
    let keyword = tokens.next()?;

    match keyword {
        "move" | "m" => {
            let room = parse_room(tokens.next()?)?;
            if tokens.next().is_some() {
                return None;
            }
            Some(Command::Move { room })
        }
        "shoot" | "s" => {
            let path: Option<Vec<RoomId>> = tokens.map(parse_room).collect();
            let path = path?;
            if path.is_empty() {
                return None;
            }
            Some(Command::Shoot { path })
        }
        "quit" | "q" | "exit" => {
            if tokens.next().is_some() {
                return None;
            }
            Some(Command::Quit)
        }
        _ => None,
    }
}

fn parse_room(token: &str) -> Option<RoomId> {
    let number: u32 = token.parse().ok()?;
    if number == 0 {
        return None;
    }
    Some(RoomId::new(number))
}
