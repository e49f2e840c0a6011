//! Interactive loop and replay, mapping input onto the turn controller.

use crate::input::{HELP, Input, InputError};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictactoe_core::{CoinFlip, GameState, TurnController};
use tracing::{debug, info, instrument, warn};

/// Writes the headline and board for `state`.
pub fn write_state(out: &mut impl Write, state: &GameState) -> std::io::Result<()> {
    writeln!(out, "{}", state.headline())?;
    writeln!(out, "{}", state.board())?;
    if let Some(line) = state.win_line() {
        let cells: Vec<String> = line.cells().iter().map(ToString::to_string).collect();
        writeln!(out, "Winning {}: {}", line.line(), cells.join(" "))?;
    }
    writeln!(out)
}

/// Interactive game session over arbitrary input and output streams.
pub struct Session<C, W> {
    controller: TurnController<C>,
    out: W,
}

impl<C: CoinFlip, W: Write> Session<C, W> {
    /// Creates a session around a fresh controller.
    pub fn new(coin: C, out: W) -> Self {
        Self {
            controller: TurnController::new(coin),
            out,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        writeln!(self.out, "{}\n", HELP)?;
        write_state(&mut self.out, self.controller.state())?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match line.parse::<Input>() {
                Ok(Input::Quit) => {
                    info!("Player quit");
                    break;
                }
                Ok(command) => self.handle(command)?,
                Err(InputError::Empty) => {}
                Err(e) => {
                    debug!(error = %e, "Unparseable input");
                    writeln!(self.out, "{}. Type `help` for commands.", e)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn handle(&mut self, command: Input) -> Result<()> {
        match command {
            Input::Select { row, col } => match self.controller.select_cell(row, col) {
                Ok(state) => write_state(&mut self.out, state)?,
                Err(e) => {
                    warn!(error = %e, "Rejected move");
                    writeln!(self.out, "{}", e)?;
                }
            },
            Input::Reset => {
                let state = self.controller.reset();
                write_state(&mut self.out, state)?;
            }
            Input::Show => write_state(&mut self.out, self.controller.state())?,
            Input::Help => writeln!(self.out, "{}", HELP)?,
            Input::Quit => {}
        }
        Ok(())
    }
}

/// Applies `moves` (each `row,col`) to a new game and returns the result.
///
/// Ignored moves (occupied cell, game over) are skipped like clicks would be.
///
/// # Errors
///
/// Fails on a move that is not a coordinate pair or lies off the board.
#[instrument(skip(coin))]
pub fn replay<C: CoinFlip>(coin: C, moves: &[String]) -> Result<GameState> {
    let mut controller = TurnController::new(coin);

    for (i, text) in moves.iter().enumerate() {
        let (row, col) = match text.parse::<Input>() {
            Ok(Input::Select { row, col }) => (row, col),
            Ok(other) => bail!("Move {} ({:?}) is not a coordinate: {:?}", i + 1, text, other),
            Err(e) => {
                return Err(e).with_context(|| format!("Move {} ({:?}) is invalid", i + 1, text));
            }
        };
        controller
            .select_cell(row, col)
            .with_context(|| format!("Move {} ({:?}) was rejected", i + 1, text))?;
    }

    Ok(controller.state().clone())
}
