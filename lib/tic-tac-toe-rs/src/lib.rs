//! An exact Tic-Tac-Toe solver.
//!
//! Boards are small `Copy` values.
//! The game value of any board is found with minimax and alpha-beta pruning,
//! and [`best_move`] picks a move for an automated player.

mod board;
mod evaluate;
mod search;
mod select;
mod team;

pub use self::{
    board::{
        Board,
        IndexOutOfRangeError,
        ParseBoardError,
        PlaceError,
        Successors,
    },
    evaluate::{
        evaluate,
        Outcome,
        WinType,
        WinnerInfo,
    },
    search::{
        minimax,
        minimax_with_stats,
        search,
        search_with_stats,
        SearchStats,
        MAX_BOUND,
        MIN_BOUND,
    },
    select::{
        best_move,
        best_move_with_stats,
    },
    team::{
        InvalidCharError,
        InvalidStrError,
        Team,
    },
};

/// The # of tic-tac-toe tiles
pub const NUM_TILES: u8 = 9;

/// Check a board after a half-move.
///
/// A turn loop calls this after every move; the game is over on a win,
/// or on [`Outcome::NoWinner`] with a full board.
pub fn evaluate_root(board: Board) -> Outcome {
    evaluate(board)
}
