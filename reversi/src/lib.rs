//! Reversi game state for driving the move-selection engine.
//!
//! The engine crate is stateless: it scores positions it is handed. This
//! crate owns the running game (cells, side to move, disc counts, game-over
//! detection), enumerates legal moves for the side to move, and feeds the
//! engine through [`Game::suggest`].

#[cfg(feature = "python")]
pub mod bindings;

use std::cmp::Ordering;

use reversi_engine::{rules, Coord, EngineConfig, EngineError, BLACK, EMPTY, WHITE};

/// Flat cell array in the engine's encoding, indexed as `row * 8 + col`.
pub type Cells = reversi_engine::Board;

/// Errors raised when driving the game from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The requested cell is not a legal destination for the side to move.
    InvalidMove,
    /// The game has already finished.
    GameOver,
}

/// One of the two sides. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Cell encoding used by the engine crate.
    pub fn code(self) -> u8 {
        match self {
            Player::Black => BLACK,
            Player::White => WHITE,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disc {
    Empty,
    Black,
    White,
}

/// A running game of Reversi.
///
/// Starts from the standard 4-disc centre layout. The turn passes
/// automatically when the opponent has no reply; the game ends when the
/// board is full or both sides are blocked.
#[derive(Debug, Clone)]
pub struct Game {
    cells: Cells,
    to_move: Player,
    black: u8,
    white: u8,
    finished: bool,
}

impl Game {
    pub fn new() -> Self {
        let mut cells = [EMPTY; 64];
        cells[27] = WHITE; // d4
        cells[28] = BLACK; // e4
        cells[35] = BLACK; // d5
        cells[36] = WHITE; // e5

        Game {
            cells,
            to_move: Player::Black,
            black: 2,
            white: 2,
            finished: false,
        }
    }

    /// Put the game back to the starting position.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// The flat board in the engine's encoding.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn disc(&self, row: usize, col: usize) -> Disc {
        match self.cells[Coord::new(row, col).index()] {
            BLACK => Disc::Black,
            WHITE => Disc::White,
            _ => Disc::Empty,
        }
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Disc counts as (black, white).
    pub fn counts(&self) -> (u8, u8) {
        (self.black, self.white)
    }

    pub fn is_over(&self) -> bool {
        self.finished
    }

    /// Legal destinations for the side to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.finished {
            return Vec::new();
        }
        rules::valid_moves(&self.cells, self.to_move.code())
    }

    /// Legal destinations as a flat 64-cell mask.
    pub fn legal_mask(&self) -> [bool; 64] {
        let mut mask = [false; 64];
        for coord in self.legal_moves() {
            mask[coord.index()] = true;
        }
        mask
    }

    /// Ask the engine for a move in the current position.
    pub fn suggest(&self, config: &EngineConfig) -> Result<Coord, EngineError> {
        reversi_engine::select_move(
            &self.cells,
            &self.legal_moves(),
            self.to_move.code(),
            config,
        )
    }

    /// Play a disc for the side to move. Returns the number of flipped
    /// discs.
    pub fn play(&mut self, coord: Coord) -> Result<u8, GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        if !rules::is_valid_move(&self.cells, self.to_move.code(), coord) {
            return Err(GameError::InvalidMove);
        }

        let flipped = rules::apply_move(&mut self.cells, self.to_move.code(), coord, None) as u8;
        self.recount();

        if self.black + self.white == 64 {
            self.finished = true;
            return Ok(flipped);
        }

        self.to_move = self.to_move.opponent();
        if self.legal_moves().is_empty() {
            self.pass();
        }

        Ok(flipped)
    }

    /// Forfeit the turn. Ends the game if the opponent is blocked as well.
    pub fn pass(&mut self) {
        self.to_move = self.to_move.opponent();
        if self.legal_moves().is_empty() {
            self.finished = true;
        }
    }

    /// The leading side once the game is over; `None` on a draw or while
    /// the game is still running.
    pub fn winner(&self) -> Option<Player> {
        if !self.finished {
            return None;
        }

        match self.black.cmp(&self.white) {
            Ordering::Greater => Some(Player::Black),
            Ordering::Less => Some(Player::White),
            Ordering::Equal => None,
        }
    }

    fn recount(&mut self) {
        self.black = self.cells.iter().filter(|&&cell| cell == BLACK).count() as u8;
        self.white = self.cells.iter().filter(|&&cell| cell == WHITE).count() as u8;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
