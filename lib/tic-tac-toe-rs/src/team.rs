/// Failed to parse a [`Team`] from a [`char`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid Tic-Tac-Toe team")]
pub struct InvalidCharError(pub char);

/// Failed to parse a [`Team`] from a [`str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStrError {
    /// The string is the wrong length. It must contain exactly one char.
    ///
    /// The length is in chars.
    #[error("a Tic-Tac-Toe team cannot be made from inputs of length {0}")]
    InvalidLength(usize),

    /// The char is not valid.
    #[error(transparent)]
    InvalidChar(#[from] InvalidCharError),
}

/// A Tic Tac Toe Team.
///
/// X always moves first from the empty board and is the maximizing side of the search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Team {
    X,
    O,
}

impl Team {
    /// Invert the teams
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// The numeric encoding of this team's mark.
    ///
    /// X is `1` and O is `-1`. An empty tile counts as `0`.
    pub fn value(self) -> i8 {
        match self {
            Self::X => 1,
            Self::O => -1,
        }
    }

    /// Returns true if this team maximizes the game value.
    pub fn is_maximizer(self) -> bool {
        self == Self::X
    }

    /// Try to parse a [`Team`] from a [`char`].
    pub fn from_char(c: char) -> Result<Self, InvalidCharError> {
        match c {
            'x' | 'X' => Ok(Self::X),
            'o' | 'O' => Ok(Self::O),
            c => Err(InvalidCharError(c)),
        }
    }

    /// The uppercase char for this team.
    pub fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for Team {
    type Err = InvalidStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::from_char(c)?),
            _ => Err(InvalidStrError::InvalidLength(s.trim().chars().count())),
        }
    }
}
