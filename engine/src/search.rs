//! Fixed-depth minimax over the move tree.

use crate::eval::evaluate;
use crate::rules;
use crate::weights::WeightMatrix;
use crate::{opponent, Board, WeightAdaptation};

/// Immutable parameters shared by every node of one search.
///
/// The perspective player is fixed at the top level: leaf evaluations are
/// always signed relative to it, no matter which side is to move at the
/// leaf.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext {
    pub perspective: u8,
    pub max_depth: u32,
    pub adaptation: WeightAdaptation,
    pub pruning: bool,
}

/// Score `board` with `side` to move and `depth` plies remaining, from the
/// perspective player's point of view.
///
/// The perspective player's turns maximize, the opponent's minimize. A
/// side with no legal move forfeits the turn: the recursion continues with
/// the opponent to move and one ply of the budget consumed, board and
/// weights untouched. Callers start with the full window
/// `(i32::MIN, i32::MAX)`; when `ctx.pruning` is set, siblings are cut off
/// once `beta <= alpha`, which never changes the returned score.
pub fn search(
    ctx: &SearchContext,
    board: &Board,
    weights: &WeightMatrix,
    depth: u32,
    side: u8,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if depth == 0 {
        return evaluate(board, weights, ctx.perspective);
    }

    let moves = rules::valid_moves(board, side);
    if moves.is_empty() {
        return search(ctx, board, weights, depth - 1, opponent(side), alpha, beta);
    }

    // Discs the opponent captures weaken those squares for the rest of
    // this line; the penalty grows with distance from the root.
    let overlay_penalty = match ctx.adaptation {
        WeightAdaptation::DepthPenalized if side == opponent(ctx.perspective) => {
            Some(ctx.max_depth.saturating_sub(depth) as i32)
        }
        _ => None,
    };

    let maximizing = side == ctx.perspective;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let mut child = *board;
        let score = match overlay_penalty {
            Some(penalty) => {
                let mut branch_weights = *weights;
                rules::apply_move(&mut child, side, mv, Some((&mut branch_weights, penalty)));
                search(
                    ctx,
                    &child,
                    &branch_weights,
                    depth - 1,
                    opponent(side),
                    alpha,
                    beta,
                )
            }
            None => {
                rules::apply_move(&mut child, side, mv, None);
                search(ctx, &child, weights, depth - 1, opponent(side), alpha, beta)
            }
        };

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if ctx.pruning && beta <= alpha {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, BLACK, EMPTY, START_WEIGHTS, WHITE};

    fn context(perspective: u8, max_depth: u32) -> SearchContext {
        SearchContext {
            perspective,
            max_depth,
            adaptation: WeightAdaptation::Static,
            pruning: true,
        }
    }

    #[test]
    fn test_depth_zero_evaluates() {
        let mut board = [EMPTY; 64];
        board[0] = BLACK;

        let ctx = context(BLACK, 4);
        let score = search(&ctx, &board, &START_WEIGHTS, 0, WHITE, i32::MIN, i32::MAX);

        assert_eq!(score, 90);
    }

    #[test]
    fn test_blocked_side_passes_and_consumes_a_ply() {
        // Black a1, White b1: White has no legal move anywhere, Black's
        // only move is c1.
        let mut board = [EMPTY; 64];
        board[0] = BLACK;
        board[1] = WHITE;

        let ctx = context(BLACK, 4);

        // Depth 1: White passes, the budget runs out, the board is scored
        // as it stands.
        let shallow = search(&ctx, &board, &START_WEIGHTS, 1, WHITE, i32::MIN, i32::MAX);
        assert_eq!(shallow, 90 + 15);

        // Depth 2: the pass hands Black one ply, who takes c1 and flips b1.
        let deep = search(&ctx, &board, &START_WEIGHTS, 2, WHITE, i32::MIN, i32::MAX);
        assert_eq!(deep, 90 - 15 + 10);
    }

    #[test]
    fn test_minimizing_side_picks_the_worst_line_for_us() {
        // After Black d3, White to move at depth 1 must leave the position
        // scored at the minimum over White's replies.
        let mut board = [EMPTY; 64];
        board[27] = WHITE;
        board[28] = BLACK;
        board[35] = BLACK;
        board[36] = WHITE;
        rules::apply_move(&mut board, BLACK, Coord::new(2, 3), None);

        let ctx = context(BLACK, 4);
        let score = search(&ctx, &board, &START_WEIGHTS, 1, WHITE, i32::MIN, i32::MAX);

        let floor = rules::valid_moves(&board, WHITE)
            .into_iter()
            .map(|mv| {
                let mut child = board;
                rules::apply_move(&mut child, WHITE, mv, None);
                crate::eval::evaluate(&child, &START_WEIGHTS, BLACK)
            })
            .min()
            .unwrap();

        assert_eq!(score, floor);
    }

    #[test]
    fn test_adaptive_weights_stay_branch_private() {
        let mut board = [EMPTY; 64];
        board[27] = WHITE;
        board[28] = BLACK;
        board[35] = BLACK;
        board[36] = WHITE;

        let ctx = SearchContext {
            perspective: BLACK,
            max_depth: 3,
            adaptation: WeightAdaptation::DepthPenalized,
            pruning: false,
        };
        let weights = START_WEIGHTS;

        let first = search(&ctx, &board, &weights, 3, BLACK, i32::MIN, i32::MAX);
        let second = search(&ctx, &board, &weights, 3, BLACK, i32::MIN, i32::MAX);

        // The caller's table is never mutated, so repeated searches agree.
        assert_eq!(weights, START_WEIGHTS);
        assert_eq!(first, second);
    }
}
