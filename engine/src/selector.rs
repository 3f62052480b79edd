//! Top-level move selection.

use rand::seq::SliceRandom;

use crate::rules;
use crate::search::{search, SearchContext};
use crate::{opponent, Board, Coord, EngineConfig, EngineError, FallbackPolicy};

/// Search score for every candidate root move, in the caller's order.
///
/// Each candidate is applied to a private board copy for the selecting
/// player, then handed to the search with the opponent to move and one ply
/// of the depth budget already spent. Every candidate starts from the
/// configured initial weight table.
pub fn score_root_moves(
    board: &Board,
    legal_moves: &[Coord],
    player: u8,
    config: &EngineConfig,
) -> Vec<i32> {
    let ctx = SearchContext {
        perspective: player,
        max_depth: config.max_depth,
        adaptation: config.adaptation,
        pruning: config.pruning,
    };

    legal_moves
        .iter()
        .map(|&mv| {
            let mut child = *board;
            rules::apply_move(&mut child, player, mv, None);
            search(
                &ctx,
                &child,
                &config.weights,
                config.max_depth.saturating_sub(1),
                opponent(player),
                i32::MIN,
                i32::MAX,
            )
        })
        .collect()
}

/// Pick the best move for `player` among `legal_moves`.
///
/// The first candidate with the strictly highest search score wins; a
/// later candidate never displaces an equal-scoring earlier one. If no
/// candidate improves on the sentinel, the configured fallback policy
/// decides instead.
///
/// `legal_moves` must be non-empty: move availability is the caller's
/// responsibility to check before asking the engine to choose.
pub fn select_move(
    board: &Board,
    legal_moves: &[Coord],
    player: u8,
    config: &EngineConfig,
) -> Result<Coord, EngineError> {
    if legal_moves.is_empty() {
        return Err(EngineError::NoLegalMoves { player });
    }

    let scores = score_root_moves(board, legal_moves, player, config);

    let mut best: Option<Coord> = None;
    let mut best_score = i32::MIN;
    for (&mv, &score) in legal_moves.iter().zip(&scores) {
        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }

    Ok(best.unwrap_or_else(|| fallback_move(legal_moves, config)))
}

/// Convenience entry point: enumerate the legal moves and select one.
pub fn compute_move(board: &Board, player: u8, config: &EngineConfig) -> Result<Coord, EngineError> {
    let legal_moves = rules::valid_moves(board, player);
    select_move(board, &legal_moves, player, config)
}

fn fallback_move(legal_moves: &[Coord], config: &EngineConfig) -> Coord {
    match config.fallback {
        FallbackPolicy::BestStatic => {
            let mut best = legal_moves[0];
            let mut best_weight = i32::MIN;
            for &mv in legal_moves {
                let weight = config.weights[mv.index()];
                if weight > best_weight {
                    best_weight = weight;
                    best = mv;
                }
            }
            best
        }
        FallbackPolicy::Random => legal_moves
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(legal_moves[0]),
    }
}
