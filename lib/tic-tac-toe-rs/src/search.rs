use crate::{
    evaluate,
    Board,
    Outcome,
    Team,
};

/// A bound below every game value.
///
/// Used as the initial alpha and as the starting best value of a maximizing node.
pub const MIN_BOUND: i8 = -2;

/// A bound above every game value.
///
/// Used as the initial beta and as the starting best value of a minimizing node.
pub const MAX_BOUND: i8 = 2;

/// Counters collected while searching.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// The number of boards visited, including the root.
    pub nodes: u64,

    /// The number of times a node stopped iterating its children early.
    pub cutoffs: u64,
}

/// Get the game value of a board with `mover` to act, using alpha-beta pruning.
///
/// The value is `1` if X wins with best play, `-1` if O wins, and `0` for a draw.
/// Pass [`MIN_BOUND`] and [`MAX_BOUND`] for a full-window search.
pub fn search(board: Board, mover: Team, alpha: i8, beta: i8) -> i8 {
    search_with_stats(board, mover, alpha, beta, &mut SearchStats::default())
}

/// Like [`search`], but records counters into `stats`.
pub fn search_with_stats(
    board: Board,
    mover: Team,
    mut alpha: i8,
    mut beta: i8,
    stats: &mut SearchStats,
) -> i8 {
    stats.nodes += 1;

    if let Outcome::Win(team) = evaluate(board) {
        return team.value();
    }

    let mut children = board.successors(mover).peekable();
    if children.peek().is_none() {
        return 0;
    }

    let next = mover.inverse();
    if mover.is_maximizer() {
        let mut best = MIN_BOUND;
        for (_, child) in children {
            let value = search_with_stats(child, next, alpha, beta, stats);
            best = best.max(value);
            alpha = alpha.max(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = MAX_BOUND;
        for (_, child) in children {
            let value = search_with_stats(child, next, alpha, beta, stats);
            best = best.min(value);
            beta = beta.min(best);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Get the game value of a board with `mover` to act, visiting every node.
///
/// This is plain minimax without pruning.
/// It always agrees with [`search`] and exists to check it.
pub fn minimax(board: Board, mover: Team) -> i8 {
    minimax_with_stats(board, mover, &mut SearchStats::default())
}

/// Like [`minimax`], but records counters into `stats`.
pub fn minimax_with_stats(board: Board, mover: Team, stats: &mut SearchStats) -> i8 {
    stats.nodes += 1;

    if let Outcome::Win(team) = evaluate(board) {
        return team.value();
    }

    let next = mover.inverse();
    let values = board
        .successors(mover)
        .map(|(_, child)| minimax_with_stats(child, next, stats));

    let best = if mover.is_maximizer() {
        values.max()
    } else {
        values.min()
    };

    // No children means the board is full: a draw.
    best.unwrap_or(0)
}

#[cfg(test)]
mod test {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().expect("invalid board")
    }

    #[test]
    fn empty_board_is_a_draw() {
        assert_eq!(search(Board::new(), Team::X, MIN_BOUND, MAX_BOUND), 0);
        assert_eq!(minimax(Board::new(), Team::X), 0);
    }

    #[test]
    fn terminal_boards() {
        // Decided boards return immediately, whoever is to move.
        let x_won = board("XXX OO. ...");
        let mut stats = SearchStats::default();
        assert_eq!(
            search_with_stats(x_won, Team::O, MIN_BOUND, MAX_BOUND, &mut stats),
            1
        );
        assert_eq!(stats.nodes, 1);

        let o_won = board("XX. OOO X.X");
        assert_eq!(search(o_won, Team::X, MIN_BOUND, MAX_BOUND), -1);

        let draw = board("XXO OOX XOX");
        assert_eq!(search(draw, Team::O, MIN_BOUND, MAX_BOUND), 0);
        assert_eq!(minimax(draw, Team::O), 0);
    }

    #[test]
    fn forced_wins() {
        // X to move completes the top row.
        assert_eq!(search(board("XX.OO.OX."), Team::X, MIN_BOUND, MAX_BOUND), 1);

        // X has a fork after the corners.
        let fork = board("X.O .O. ..X");
        assert_eq!(search(fork, Team::X, MIN_BOUND, MAX_BOUND), 1);
        assert_eq!(minimax(fork, Team::X), 1);

        // O to move with two marks on an open middle row.
        assert_eq!(search(board("... OO. ..."), Team::O, MIN_BOUND, MAX_BOUND), -1);
    }

    #[test]
    fn deterministic() {
        let b = board("X...O....");
        let first = search(b, Team::X, MIN_BOUND, MAX_BOUND);
        for _ in 0..4 {
            assert_eq!(search(b, Team::X, MIN_BOUND, MAX_BOUND), first);
        }
    }

    #[test]
    fn pruning_visits_fewer_nodes() {
        let mut pruned = SearchStats::default();
        let mut full = SearchStats::default();

        let pruned_value =
            search_with_stats(Board::new(), Team::X, MIN_BOUND, MAX_BOUND, &mut pruned);
        let full_value = minimax_with_stats(Board::new(), Team::X, &mut full);

        assert_eq!(pruned_value, full_value);
        assert_eq!(full.nodes, 549_946);
        assert_eq!(full.cutoffs, 0);
        assert!(pruned.cutoffs > 0);
        assert!(
            pruned.nodes < full.nodes,
            "pruned search visited {} nodes, full search visited {}",
            pruned.nodes,
            full.nodes
        );
    }
}
