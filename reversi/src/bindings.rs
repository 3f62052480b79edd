//! PyO3 bindings exposing the game and the engine to Python.
//!
//! Training code drives [`ReversiGame`] step by step and calls the
//! module-level functions to get engine moves for arbitrary positions.

use ndarray::Array2;
use numpy::{PyArray1, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use reversi_engine::{
    compute_move, rules, score_root_moves, Coord, EngineConfig, FallbackPolicy, WeightAdaptation,
};

use crate::{Game, Player};

/// Python wrapper for a running Reversi game.
#[pyclass]
pub struct ReversiGame {
    game: Game,
}

#[pymethods]
impl ReversiGame {
    /// Create a new game with the standard 4-disc centre layout.
    #[new]
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Put the game back to the starting position.
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Play at `action` (0-63, row-major) for the side to move.
    ///
    /// Returns:
    ///     tuple: (valid, discs_flipped, game_over)
    ///
    /// Raises:
    ///     ValueError: if `action` is out of range.
    pub fn step(&mut self, action: usize) -> PyResult<(bool, u8, bool)> {
        if action >= 64 {
            return Err(PyValueError::new_err(format!(
                "Action {} is out of range. Must be between 0 and 63 (inclusive).",
                action
            )));
        }

        match self.game.play(Coord::from_index(action)) {
            Ok(flipped) => Ok((true, flipped, self.game.is_over())),
            // Invalid and late moves are reported, not raised, so the
            // Python layer can keep its own control flow.
            Err(_) => Ok((false, 0, self.game.is_over())),
        }
    }

    /// The board as an (8, 8) uint8 array: 0=Empty, 1=Black, 2=White.
    pub fn get_board<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray2<u8>> {
        let cells = *self.game.cells();
        let array = Array2::from_shape_fn((8, 8), |(row, col)| cells[row * 8 + col]);
        Ok(PyArray2::from_owned_array(py, array))
    }

    /// Legal destinations for the side to move as a (64,) bool array.
    pub fn get_valid_moves<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<bool>> {
        Ok(PyArray1::from_slice(py, &self.game.legal_mask()))
    }

    /// The side to move: 0 for Black, 1 for White.
    pub fn get_current_player(&self) -> u8 {
        match self.game.to_move() {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    /// Disc counts as (black, white).
    pub fn get_piece_counts(&self) -> (u8, u8) {
        self.game.counts()
    }

    /// 0 = Black wins, 1 = White wins, 2 = draw, 3 = still running.
    pub fn get_winner(&self) -> u8 {
        if !self.game.is_over() {
            return 3;
        }

        match self.game.winner() {
            Some(Player::Black) => 0,
            Some(Player::White) => 1,
            None => 2,
        }
    }

    /// Ask the engine for a move in the current position.
    ///
    /// Returns the chosen action (0-63), or 255 when the game is over and
    /// no move exists.
    #[pyo3(signature = (depth = 4, adaptive = true, pruning = true, random_fallback = false))]
    pub fn suggest_move(
        &self,
        depth: u32,
        adaptive: bool,
        pruning: bool,
        random_fallback: bool,
    ) -> u8 {
        let config = build_config(depth, adaptive, pruning, random_fallback);
        match self.game.suggest(&config) {
            Ok(coord) => coord.index() as u8,
            Err(_) => u8::MAX,
        }
    }
}

fn parse_board(board: Vec<u8>) -> PyResult<reversi_engine::Board> {
    if board.len() != 64 {
        return Err(PyValueError::new_err(format!(
            "Board must have exactly 64 elements, got {}",
            board.len()
        )));
    }

    let mut cells: reversi_engine::Board = [0; 64];
    cells.copy_from_slice(&board);
    Ok(cells)
}

fn build_config(depth: u32, adaptive: bool, pruning: bool, random_fallback: bool) -> EngineConfig {
    EngineConfig {
        max_depth: depth,
        adaptation: if adaptive {
            WeightAdaptation::DepthPenalized
        } else {
            WeightAdaptation::Static
        },
        fallback: if random_fallback {
            FallbackPolicy::Random
        } else {
            FallbackPolicy::BestStatic
        },
        pruning,
        ..EngineConfig::default()
    }
}

/// Compute the engine's move for an arbitrary position.
///
/// Args:
///     board (list): Flat board state, 64 elements (0=Empty, 1=Black, 2=White)
///     player (int): Side to move (1=Black, 2=White)
///
/// Returns:
///     int: Move index (0-63), or 255 if the player has no legal moves.
#[pyfunction]
#[pyo3(signature = (board, player, depth = 4, adaptive = true, pruning = true, random_fallback = false))]
fn compute_move_py(
    board: Vec<u8>,
    player: u8,
    depth: u32,
    adaptive: bool,
    pruning: bool,
    random_fallback: bool,
) -> PyResult<u8> {
    let cells = parse_board(board)?;
    let config = build_config(depth, adaptive, pruning, random_fallback);

    Ok(match compute_move(&cells, player, &config) {
        Ok(coord) => coord.index() as u8,
        Err(_) => u8::MAX,
    })
}

/// Search score for every cell of an arbitrary position.
///
/// Returns:
///     np.ndarray: Shape (64,) int32; illegal destinations hold 0.
#[pyfunction]
#[pyo3(signature = (board, player, depth = 4, adaptive = true, pruning = true))]
fn compute_move_scores_py<'py>(
    py: Python<'py>,
    board: Vec<u8>,
    player: u8,
    depth: u32,
    adaptive: bool,
    pruning: bool,
) -> PyResult<&'py PyArray1<i32>> {
    let cells = parse_board(board)?;
    let config = build_config(depth, adaptive, pruning, false);

    let legal_moves = rules::valid_moves(&cells, player);
    let scores = score_root_moves(&cells, &legal_moves, player, &config);

    let mut table = [0i32; 64];
    for (coord, score) in legal_moves.iter().zip(scores) {
        table[coord.index()] = score;
    }

    Ok(PyArray1::from_slice(py, &table))
}

/// Python module definition; importable as `reversi`.
#[pymodule]
fn reversi(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<ReversiGame>()?;
    m.add_function(wrap_pyfunction!(compute_move_py, m)?)?;
    m.add_function(wrap_pyfunction!(compute_move_scores_py, m)?)?;
    Ok(())
}
