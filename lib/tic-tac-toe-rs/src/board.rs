use crate::{
    Team,
    NUM_TILES,
};

/// The tile index was not in `0..9`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("tile index {0} is out of range (must be 0-8)")]
pub struct IndexOutOfRangeError(pub u8);

/// Failed to place a mark on a [`Board`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    /// The index does not name a tile.
    #[error(transparent)]
    InvalidIndex(#[from] IndexOutOfRangeError),

    /// The tile already holds a mark.
    #[error("tile {index} is already occupied by {team}")]
    Occupied { index: u8, team: Team },
}

/// Failed to parse a [`Board`] from a [`str`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// A char that is not a mark, an empty tile or a separator.
    #[error("invalid tile '{c}' at tile {position}")]
    InvalidChar { c: char, position: usize },

    /// The wrong number of tiles.
    #[error("expected 9 tiles, got {0}")]
    InvalidLength(usize),
}

/// A Tic Tac Toe board.
///
/// Tiles are indexed from 0 at the top left to 8 at the bottom right, row by row.
/// A board is a plain value; every "move" produces a new board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // the bitboard
    // 9 tiles, so it cannot fit in a u8 but can fit in a u16
    x_state: u16,
    o_state: u16,
}

impl Board {
    /// Make a new, empty [`Board`].
    pub fn new() -> Self {
        Board {
            x_state: 0,
            o_state: 0,
        }
    }

    /// Make a [`Board`] from its tiles, in index order.
    pub fn from_tiles(tiles: [Option<Team>; NUM_TILES as usize]) -> Self {
        tiles
            .iter()
            .zip(0..NUM_TILES)
            .fold(Self::new(), |board, (tile, index)| board.set(index, *tile))
    }

    /// Get the tile at the index.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    pub fn get(self, index: u8) -> Option<Team> {
        assert!(index < NUM_TILES);
        let index_mask = 1 << index;
        if self.x_state & index_mask != 0 {
            Some(Team::X)
        } else if self.o_state & index_mask != 0 {
            Some(Team::O)
        } else {
            None
        }
    }

    /// Get the tile at the index, failing if the index does not name a tile.
    pub fn cell_at(self, index: u8) -> Result<Option<Team>, IndexOutOfRangeError> {
        if index >= NUM_TILES {
            return Err(IndexOutOfRangeError(index));
        }

        Ok(self.get(index))
    }

    /// Count the marks of a team.
    pub fn count(self, team: Team) -> u8 {
        let state = match team {
            Team::X => self.x_state,
            Team::O => self.o_state,
        };

        // At most 9 bits are ever set.
        state.count_ones() as u8
    }

    /// The number of tiles holding a mark.
    pub fn num_occupied(self) -> u8 {
        (self.x_state | self.o_state).count_ones() as u8
    }

    /// Returns true if no tile is empty.
    ///
    /// This does not check for wins.
    pub fn is_full(self) -> bool {
        self.num_occupied() >= NUM_TILES
    }

    /// Get the team whose turn it is, assuming X moved first.
    pub fn get_turn(self) -> Team {
        if self.count(Team::X) > self.count(Team::O) {
            Team::O
        } else {
            Team::X
        }
    }

    /// Set the tile at the index.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    #[must_use]
    fn set(mut self, index: u8, team: Option<Team>) -> Self {
        assert!(index < NUM_TILES);
        match team {
            Some(Team::X) => {
                self.x_state |= 1 << index;
                self.o_state &= !(1 << index);
            }
            Some(Team::O) => {
                self.x_state &= !(1 << index);
                self.o_state |= 1 << index;
            }
            None => {
                self.x_state &= !(1 << index);
                self.o_state &= !(1 << index);
            }
        }
        self
    }

    /// Place a mark on an empty tile, returning the new board.
    pub fn try_place(self, index: u8, team: Team) -> Result<Self, PlaceError> {
        if let Some(occupant) = self.cell_at(index)? {
            return Err(PlaceError::Occupied {
                index,
                team: occupant,
            });
        }

        Ok(self.set(index, Some(team)))
    }

    /// Get an iterator over the boards reachable by one move of `mover`.
    ///
    /// Children are produced in ascending tile index order.
    /// Items are tuples of the index of the placed tile and the resulting board.
    /// The iterator is empty if and only if the board is full.
    pub fn successors(self, mover: Team) -> Successors {
        Successors::new(self, mover)
    }

    /// Get an iterator over the tiles.
    ///
    /// The iterator starts at 0 at the top left and ends at 8 at the bottom right.
    ///
    /// # Returns
    /// Returns a tuple pair, where the first element is the index and the second is the tile value.
    pub fn iter(self) -> impl Iterator<Item = (u8, Option<Team>)> {
        (0..NUM_TILES).map(move |index| (index, self.get(index)))
    }

    /// Get the index of the single tile that differs between two boards.
    ///
    /// Returns `None` if the boards are equal or differ in more than one tile.
    pub fn changed_tile(self, other: Self) -> Option<u8> {
        let diff = (self.x_state ^ other.x_state) | (self.o_state ^ other.o_state);
        if diff.count_ones() != 1 {
            return None;
        }

        Some(diff.trailing_zeros() as u8)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parse a row-major board like `"XX.OO.OX."`.
    ///
    /// `X` and `O` (any case) are marks, `.`, `-` and `_` are empty tiles.
    /// Whitespace, `|` and `/` are ignored so rows may be separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut position = 0;
        for c in s.chars() {
            if c.is_whitespace() || c == '|' || c == '/' {
                continue;
            }

            let tile = match c {
                '.' | '-' | '_' => None,
                c => Some(
                    Team::from_char(c).map_err(|_| ParseBoardError::InvalidChar { c, position })?,
                ),
            };

            if position < usize::from(NUM_TILES) {
                board = board.set(position as u8, tile);
            }
            position += 1;
        }

        if position != usize::from(NUM_TILES) {
            return Err(ParseBoardError::InvalidLength(position));
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board {
    /// Writes the same notation `Board::from_str` accepts, without separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (_, tile) in self.iter() {
            let c = tile.map_or('.', Team::as_char);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// An iterator over the child boards of a [`Board`].
#[derive(Debug)]
pub struct Successors {
    board: Board,
    mover: Team,
    index: u8,
}

impl Successors {
    fn new(board: Board, mover: Team) -> Self {
        Self {
            board,
            mover,
            index: 0,
        }
    }
}

impl Iterator for Successors {
    type Item = (u8, Board);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.index >= NUM_TILES {
                return None;
            }

            let index_mask = 1 << self.index;
            let tile_is_empty = ((self.board.x_state | self.board.o_state) & index_mask) == 0;

            if tile_is_empty {
                let board = self.board.set(self.index, Some(self.mover));
                let item = Some((self.index, board));
                self.index += 1;
                return item;
            }
            self.index += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(usize::from(NUM_TILES - self.index.min(NUM_TILES))))
    }
}

impl std::iter::FusedIterator for Successors {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cell_at_bounds() {
        let board: Board = "X........".parse().expect("invalid board");
        assert_eq!(board.cell_at(0), Ok(Some(Team::X)));
        assert_eq!(board.cell_at(8), Ok(None));
        assert_eq!(board.cell_at(9), Err(IndexOutOfRangeError(9)));
        assert_eq!(board.cell_at(255), Err(IndexOutOfRangeError(255)));
    }

    #[test]
    fn is_full() {
        assert!(!Board::new().is_full());
        let board: Board = "XOX XOO OXX".parse().expect("invalid board");
        assert!(board.is_full());
        assert_eq!(board.successors(Team::X).count(), 0);
    }

    #[test]
    fn successors_fill_one_empty_tile() {
        let board: Board = "X.O|.X.|O..".parse().expect("invalid board");
        let children: Vec<_> = board.successors(Team::O).collect();
        assert_eq!(children.len(), 9 - usize::from(board.num_occupied()));

        let indexes: Vec<u8> = children.iter().map(|(index, _)| *index).collect();
        assert_eq!(indexes, [1, 3, 5, 7, 8]);

        for (index, child) in children {
            assert_eq!(board.get(index), None);
            assert_eq!(child.get(index), Some(Team::O));
            assert_eq!(board.changed_tile(child), Some(index));
        }
    }

    #[test]
    fn try_place() {
        let board = Board::new().try_place(4, Team::X).expect("failed to place");
        assert_eq!(board.get(4), Some(Team::X));
        assert_eq!(
            board.try_place(4, Team::O),
            Err(PlaceError::Occupied {
                index: 4,
                team: Team::X
            })
        );
        assert_eq!(
            board.try_place(9, Team::O),
            Err(PlaceError::InvalidIndex(IndexOutOfRangeError(9)))
        );
    }

    #[test]
    fn get_turn() {
        assert_eq!(Board::new().get_turn(), Team::X);
        let board: Board = "X........".parse().expect("invalid board");
        assert_eq!(board.get_turn(), Team::O);
        let board: Board = "XO.......".parse().expect("invalid board");
        assert_eq!(board.get_turn(), Team::X);
    }

    #[test]
    fn parse_and_display() {
        let board: Board = "xx_|oo_|oX_".parse().expect("invalid board");
        assert_eq!(board.to_string(), "XX.OO.OX.");
        assert_eq!(board.count(Team::X), 3);
        assert_eq!(board.count(Team::O), 3);

        let tiles = [
            Some(Team::X),
            Some(Team::X),
            None,
            Some(Team::O),
            Some(Team::O),
            None,
            Some(Team::O),
            Some(Team::X),
            None,
        ];
        assert_eq!(Board::from_tiles(tiles), board);

        assert_eq!(
            "XX".parse::<Board>(),
            Err(ParseBoardError::InvalidLength(2))
        );
        assert_eq!(
            "XX.OO.OX.X".parse::<Board>(),
            Err(ParseBoardError::InvalidLength(10))
        );
        assert_eq!(
            "XX.OZ.OX.".parse::<Board>(),
            Err(ParseBoardError::InvalidChar {
                c: 'Z',
                position: 4
            })
        );
    }

    #[test]
    fn changed_tile() {
        let board = Board::new();
        assert_eq!(board.changed_tile(board), None);

        let two_moves: Board = "X...O....".parse().expect("invalid board");
        assert_eq!(board.changed_tile(two_moves), None);
    }
}
