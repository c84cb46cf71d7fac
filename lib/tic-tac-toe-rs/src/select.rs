use crate::{
    search_with_stats,
    Board,
    SearchStats,
    Team,
    MAX_BOUND,
    MIN_BOUND,
};
use tracing::debug;

/// Pick the best move for `mover`.
///
/// # Returns
/// Returns the board after the move, or `None` if the board is full.
/// When several moves share the best value, the one on the lowest tile index wins.
pub fn best_move(board: Board, mover: Team) -> Option<Board> {
    best_move_with_stats(board, mover, &mut SearchStats::default())
}

/// Like [`best_move`], but records counters into `stats`.
pub fn best_move_with_stats(board: Board, mover: Team, stats: &mut SearchStats) -> Option<Board> {
    let mut alpha = MIN_BOUND;
    let mut beta = MAX_BOUND;
    let next = mover.inverse();

    let mut best_value = if mover.is_maximizer() {
        MIN_BOUND
    } else {
        MAX_BOUND
    };
    let mut best_board = None;

    for (index, child) in board.successors(mover) {
        let value = search_with_stats(child, next, alpha, beta, stats);
        debug!(%mover, index, value, "scored candidate move");

        if mover.is_maximizer() {
            // Only a strictly better value replaces the incumbent.
            if value > best_value {
                best_value = value;
                best_board = Some(child);
            }
            alpha = alpha.max(best_value);
        } else {
            if value < best_value {
                best_value = value;
                best_board = Some(child);
            }
            beta = beta.min(best_value);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best_board
}
