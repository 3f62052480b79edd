//! Move legality and simulation.
//!
//! A move is legal when it lands on an empty cell and brackets at least one
//! contiguous run of opponent discs in some compass direction. Applying a
//! move places the disc and flips every bracketed run; runs that end on an
//! empty cell, off the board, or immediately on the mover's own disc are
//! left alone.

use crate::weights::WeightMatrix;
use crate::{opponent, Board, Coord, BOARD_SIZE, EMPTY};

/// The 8 compass directions as (row, col) deltas.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn in_bounds(r: i8, c: i8) -> bool {
    r >= 0 && (r as usize) < BOARD_SIZE && c >= 0 && (c as usize) < BOARD_SIZE
}

fn cell_index(r: i8, c: i8) -> usize {
    r as usize * BOARD_SIZE + c as usize
}

/// Length of the opponent run that placing at `coord` would capture in
/// direction (dr, dc). Zero when the walk leaves the board, reaches an
/// empty cell, or meets the mover's own disc with nothing in between.
fn bracketed_run(board: &Board, player: u8, coord: Coord, dr: i8, dc: i8) -> usize {
    let rival = opponent(player);
    let mut r = coord.row as i8 + dr;
    let mut c = coord.col as i8 + dc;
    let mut run = 0;

    while in_bounds(r, c) && board[cell_index(r, c)] == rival {
        run += 1;
        r += dr;
        c += dc;
    }

    if run > 0 && in_bounds(r, c) && board[cell_index(r, c)] == player {
        run
    } else {
        0
    }
}

/// Check whether `player` may place at `coord`.
pub fn is_valid_move(board: &Board, player: u8, coord: Coord) -> bool {
    if board[coord.index()] != EMPTY {
        return false;
    }

    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| bracketed_run(board, player, coord, dr, dc) > 0)
}

/// Enumerate every legal move for `player` in row-major order.
pub fn valid_moves(board: &Board, player: u8) -> Vec<Coord> {
    let mut moves = Vec::new();

    for index in 0..board.len() {
        let coord = Coord::from_index(index);
        if is_valid_move(board, player, coord) {
            moves.push(coord);
        }
    }

    moves
}

/// Place `player` at `coord` and flip every bracketed opponent run.
/// Returns the number of flipped discs.
///
/// When a weight overlay is supplied, each flipped cell's weight is
/// reduced by `penalty` in the caller's private table; the search uses
/// this to discourage lines that hand strong squares to the opponent.
///
/// The move must already be legal for `player`. That is the caller's
/// responsibility and is only checked in debug builds.
pub fn apply_move(
    board: &mut Board,
    player: u8,
    coord: Coord,
    mut overlay: Option<(&mut WeightMatrix, i32)>,
) -> usize {
    debug_assert!(
        is_valid_move(board, player, coord),
        "illegal move ({}, {}) for player {}",
        coord.row,
        coord.col,
        player
    );

    board[coord.index()] = player;
    let mut flipped = 0;

    for &(dr, dc) in &DIRECTIONS {
        let run = bracketed_run(board, player, coord, dr, dc);
        let mut r = coord.row as i8 + dr;
        let mut c = coord.col as i8 + dc;

        for _ in 0..run {
            let index = cell_index(r, c);
            board[index] = player;
            if let Some((weights, penalty)) = overlay.as_mut() {
                weights[index] -= *penalty;
            }
            r += dr;
            c += dc;
        }

        flipped += run;
    }

    flipped
}
