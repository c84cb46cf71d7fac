use tic_tac_toe::{
    Board,
    PlaceError,
    Team,
    NUM_TILES,
};

/// A rejected move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The input is not a number
    #[error("\"{0}\" is not a tile number")]
    MalformedInput(String),

    /// The number does not name a tile
    #[error("tile {0} does not exist, pick a tile from 0 to 8")]
    InvalidIndex(i64),

    /// The tile already holds a mark
    #[error("tile {0} is already taken")]
    CellOccupied(u8),
}

/// Turn a line of user input into the board after `team` moves there.
pub fn read_move(input: &str, board: Board, team: Team) -> Result<Board, InputError> {
    let input = input.trim();
    let index: i64 = input
        .parse()
        .map_err(|_| InputError::MalformedInput(input.to_string()))?;

    let index = u8::try_from(index)
        .ok()
        .filter(|index| *index < NUM_TILES)
        .ok_or(InputError::InvalidIndex(index))?;

    board.try_place(index, team).map_err(|error| match error {
        PlaceError::InvalidIndex(_) => InputError::InvalidIndex(index.into()),
        PlaceError::Occupied { index, .. } => InputError::CellOccupied(index),
    })
}
