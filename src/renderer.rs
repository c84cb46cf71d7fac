use tic_tac_toe::{
    Board,
    Outcome,
    WinType,
};

const ROW_BORDER: &str = "+---+---+---+";

/// Render a Tic-Tac-Toe board as text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    show_hints: bool,
}

impl Renderer {
    /// Make a new [`Renderer`].
    ///
    /// If `show_hints` is set, empty tiles show their index.
    pub fn new(show_hints: bool) -> Self {
        Self { show_hints }
    }

    /// Render a board as a 3x3 grid.
    pub fn render_board(self, board: Board) -> String {
        let mut out = String::with_capacity(ROW_BORDER.len() * 7 + 7);
        out.push_str(ROW_BORDER);
        out.push('\n');

        for (i, team) in board.iter() {
            let c = match team {
                Some(team) => team.as_char(),
                None if self.show_hints => char::from(b'0' + i),
                None => ' ',
            };

            out.push_str("| ");
            out.push(c);
            out.push(' ');

            if i % 3 == 2 {
                out.push_str("|\n");
                out.push_str(ROW_BORDER);
                out.push('\n');
            }
        }

        out
    }

    /// Describe the state of a game.
    pub fn describe(self, board: Board, outcome: Outcome) -> String {
        match outcome {
            Outcome::Win(team) => match board.winning_line() {
                Some(info) => {
                    let line = match info.win_type {
                        WinType::Horizontal => "row",
                        WinType::Vertical => "column",
                        WinType::Diagonal => "diagonal",
                        WinType::AntiDiagonal => "anti-diagonal",
                    };
                    let [i0, i1, i2] = info.tile_indexes;
                    format!("{team} wins on the {line} {i0}-{i1}-{i2}")
                }
                None => format!("{team} wins"),
            },
            Outcome::NoWinner if board.is_full() => "draw".to_string(),
            Outcome::NoWinner => "in progress".to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tic_tac_toe::Team;

    #[test]
    fn render_board() {
        let board: Board = "X.O .X. ..O".parse().expect("invalid board");

        let expected = "\
+---+---+---+
| X |   | O |
+---+---+---+
|   | X |   |
+---+---+---+
|   |   | O |
+---+---+---+
";
        assert_eq!(Renderer::new(false).render_board(board), expected);

        let expected = "\
+---+---+---+
| X | 1 | O |
+---+---+---+
| 3 | X | 5 |
+---+---+---+
| 6 | 7 | O |
+---+---+---+
";
        assert_eq!(Renderer::new(true).render_board(board), expected);
    }

    #[test]
    fn describe() {
        let renderer = Renderer::new(false);

        let board: Board = "OX. OX. .XO".parse().expect("invalid board");
        assert_eq!(
            renderer.describe(board, Outcome::Win(Team::X)),
            "X wins on the column 1-4-7"
        );

        let board: Board = "XXO OOX XOX".parse().expect("invalid board");
        assert_eq!(renderer.describe(board, Outcome::NoWinner), "draw");
        assert_eq!(
            renderer.describe(Board::new(), Outcome::NoWinner),
            "in progress"
        );
    }
}
