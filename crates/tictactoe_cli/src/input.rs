//! Parsing terminal input into game commands.

use derive_more::{Display, Error};
use std::str::FromStr;

/// A command typed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Mark the cell at (row, col).
    Select {
        /// Row index as typed; validated by the controller.
        row: usize,
        /// Column index as typed; validated by the controller.
        col: usize,
    },
    /// Start a new game.
    Reset,
    /// Print the board again.
    Show,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,
    /// A coordinate was not a non-negative integer.
    #[display("Not a cell number: {_0}")]
    BadNumber(#[error(not(source))] String),
    /// Unrecognised command.
    #[display("Unknown command: {_0}")]
    Unknown(#[error(not(source))] String),
}

/// Help text listing accepted commands.
pub const HELP: &str = "\
Commands:
  <row> <col>   mark a cell (also <row>,<col>), rows and columns are 0-2
  reset         start a new game
  board         show the board
  help          show this help
  quit          leave";

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_lowercase();
        match line.as_str() {
            "" => return Err(InputError::Empty),
            "reset" | "new" => return Ok(Input::Reset),
            "board" | "show" => return Ok(Input::Show),
            "help" | "?" => return Ok(Input::Help),
            "quit" | "exit" | "q" => return Ok(Input::Quit),
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => Ok(Input::Select {
                row: parse_index(row)?,
                col: parse_index(col)?,
            }),
            _ => Err(InputError::Unknown(line)),
        }
    }
}

fn parse_index(part: &str) -> Result<usize, InputError> {
    part.parse()
        .map_err(|_| InputError::BadNumber(part.to_string()))
}
