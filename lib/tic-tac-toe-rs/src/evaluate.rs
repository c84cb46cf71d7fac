use crate::{
    Board,
    Team,
};

/// The winning lines, checked in this order: rows, then columns, then diagonals.
const LINES: [([u8; 3], WinType); 8] = [
    ([0, 1, 2], WinType::Horizontal),
    ([3, 4, 5], WinType::Horizontal),
    ([6, 7, 8], WinType::Horizontal),
    ([0, 3, 6], WinType::Vertical),
    ([1, 4, 7], WinType::Vertical),
    ([2, 5, 8], WinType::Vertical),
    ([0, 4, 8], WinType::Diagonal),
    ([2, 4, 6], WinType::AntiDiagonal),
];

/// The win type
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WinType {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

/// Winner Info
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WinnerInfo {
    /// The winning team
    pub team: Team,

    /// The tile_indexes that are part of the win.
    ///
    /// Sorted from least to greatest.
    pub tile_indexes: [u8; 3],

    /// The win type
    pub win_type: WinType,
}

impl WinnerInfo {
    /// Get the least tile index
    pub fn start_tile_index(&self) -> u8 {
        self.tile_indexes[0]
    }

    /// Get the highest tile index
    pub fn end_tile_index(&self) -> u8 {
        self.tile_indexes[2]
    }
}

/// The result of looking for a completed line on a board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The team completed a line.
    Win(Team),

    /// No line is complete.
    ///
    /// This is both a finished draw and a game still in progress.
    /// Check [`Board::is_full`] to tell the two apart.
    NoWinner,
}

impl Outcome {
    /// The game value of this outcome: `1` for an X win, `-1` for an O win, `0` otherwise.
    pub fn value(self) -> i8 {
        match self {
            Self::Win(team) => team.value(),
            Self::NoWinner => 0,
        }
    }

    /// Get the winner, if there is one.
    pub fn winner(self) -> Option<Team> {
        match self {
            Self::Win(team) => Some(team),
            Self::NoWinner => None,
        }
    }

    /// The outcome that a game value represents.
    ///
    /// Positive values are X wins, negative values are O wins.
    pub fn from_value(value: i8) -> Self {
        match value.signum() {
            1 => Self::Win(Team::X),
            -1 => Self::Win(Team::O),
            _ => Self::NoWinner,
        }
    }
}

/// Sum the mark encodings of a line.
fn line_sum(board: Board, line: [u8; 3]) -> i8 {
    line.iter()
        .map(|&index| board.get(index).map_or(0, Team::value))
        .sum()
}

fn find_winning_line(board: Board) -> Option<WinnerInfo> {
    LINES.iter().find_map(|&(tile_indexes, win_type)| {
        let team = match line_sum(board, tile_indexes) {
            3 => Team::X,
            -3 => Team::O,
            _ => return None,
        };

        Some(WinnerInfo {
            team,
            tile_indexes,
            win_type,
        })
    })
}

/// Check a board for a completed line.
///
/// Lines are scanned rows first, then columns, then diagonals, and the first complete
/// line decides the outcome.
pub fn evaluate(board: Board) -> Outcome {
    match find_winning_line(board) {
        Some(info) => Outcome::Win(info.team),
        None => Outcome::NoWinner,
    }
}

impl Board {
    /// Get the winner info, if there is a winner.
    pub fn winning_line(self) -> Option<WinnerInfo> {
        find_winning_line(self)
    }

    /// Check if the given team completed any line.
    pub fn has_won(self, team: Team) -> bool {
        let target = team.value() * 3;
        LINES
            .iter()
            .any(|&(line, _)| line_sum(self, line) == target)
    }
}
