use std::fmt;

use colored::Colorize;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Draught,
    Pawn,
    Rook,
    Knight,
    Bishop,
    King,
    Queen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn glyph(&self) -> char {
        use Color::*;
        use PieceKind::*;

        match (self.kind, self.color) {
            (Draught, White) => '\u{26C0}',
            (Draught, Black) => '\u{26C2}',
            (King, White) => '\u{2654}',
            (Queen, White) => '\u{2655}',
            (Rook, White) => '\u{2656}',
            (Bishop, White) => '\u{2657}',
            (Knight, White) => '\u{2658}',
            (Pawn, White) => '\u{2659}',
            (King, Black) => '\u{265A}',
            (Queen, Black) => '\u{265B}',
            (Rook, Black) => '\u{265C}',
            (Bishop, Black) => '\u{265D}',
            (Knight, Black) => '\u{265E}',
            (Pawn, Black) => '\u{265F}',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The one place pieces are created. Boards never construct `Piece` directly.
pub fn create_piece(kind: PieceKind, color: Color) -> Piece {
    Piece { kind, color }
}

pub type Squares = Vec<Vec<Option<Piece>>>;

fn empty_squares(rows: usize, columns: usize) -> Squares {
    vec![vec![None; columns]; rows]
}

/// Color of the square at (row, column); the top-left square is white.
pub fn square_color(row: usize, column: usize) -> Color {
    if (row + column) % 2 == 1 {
        Color::Black
    } else {
        Color::White
    }
}

pub trait Board {
    fn name(&self) -> &'static str;

    fn squares(&self) -> &Squares;

    fn piece_at(&self, row: usize, column: usize) -> Option<Piece> {
        self.squares().get(row)?.get(column).copied().flatten()
    }

    fn piece_count(&self) -> usize {
        self.squares().iter().flatten().filter(|square| square.is_some()).count()
    }

    /// Glyphs only, a space for empty squares, one line per row.
    fn render_plain(&self) -> String {
        let mut out = String::new();
        for row in self.squares() {
            for square in row {
                out.push(square.map_or(' ', |piece| piece.glyph()));
            }
            out.push('\n');
        }
        out
    }

    /// Glyphs on alternating square backgrounds for terminal output.
    fn render(&self) -> String {
        let mut out = String::new();
        for (y, row) in self.squares().iter().enumerate() {
            for (x, square) in row.iter().enumerate() {
                let glyph = square.map_or(' ', |piece| piece.glyph()).to_string();
                let cell = match square_color(y, x) {
                    Color::Black => glyph.as_str().on_yellow(),
                    Color::White => glyph.as_str().on_white(),
                };
                out.push_str(&cell.to_string());
            }
            out.push('\n');
        }
        out
    }
}

pub struct ChessBoard {
    squares: Squares,
}

impl ChessBoard {
    pub const SIZE: usize = 8;

    pub fn new() -> Self {
        let mut board = ChessBoard {
            squares: empty_squares(Self::SIZE, Self::SIZE),
        };
        board.populate();
        board
    }

    fn populate(&mut self) {
        let back_rank: [(&[usize], PieceKind); 5] = [
            (&[0, 7], PieceKind::Rook),
            (&[1, 6], PieceKind::Knight),
            (&[2, 5], PieceKind::Bishop),
            (&[3], PieceKind::Queen),
            (&[4], PieceKind::King),
        ];
        for (row, color) in [(0, Color::Black), (7, Color::White)] {
            for (columns, kind) in back_rank {
                for &column in columns {
                    self.squares[row][column] = Some(create_piece(kind, color));
                }
            }
        }
        for column in 0..Self::SIZE {
            for (row, color) in [(1, Color::Black), (6, Color::White)] {
                self.squares[row][column] = Some(create_piece(PieceKind::Pawn, color));
            }
        }
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for ChessBoard {
    fn name(&self) -> &'static str {
        "chess"
    }

    fn squares(&self) -> &Squares {
        &self.squares
    }
}

pub struct CheckersBoard {
    squares: Squares,
}

impl CheckersBoard {
    pub const SIZE: usize = 10;
    const PIECE_ROWS: usize = 4;

    pub fn new() -> Self {
        let mut board = CheckersBoard {
            squares: empty_squares(Self::SIZE, Self::SIZE),
        };
        board.populate();
        board
    }

    /// Black fills the top four rows and white the bottom four, on the
    /// dark squares only; the two middle rows stay empty.
    fn populate(&mut self) {
        for (y, row) in self.squares.iter_mut().enumerate() {
            let color = if y < Self::PIECE_ROWS {
                Color::Black
            } else if y >= Self::SIZE - Self::PIECE_ROWS {
                Color::White
            } else {
                continue;
            };
            for (x, square) in row.iter_mut().enumerate() {
                if square_color(y, x) == Color::Black {
                    *square = Some(create_piece(PieceKind::Draught, color));
                }
            }
        }
    }
}

impl Default for CheckersBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for CheckersBoard {
    fn name(&self) -> &'static str {
        "checkers"
    }

    fn squares(&self) -> &Squares {
        &self.squares
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoardKind {
    Chess,
    #[default]
    Checkers,
}

impl BoardKind {
    pub fn create(self) -> Box<dyn Board> {
        debug!(kind = ?self, "creating board");
        match self {
            BoardKind::Chess => Box::new(ChessBoard::new()),
            BoardKind::Checkers => Box::new(CheckersBoard::new()),
        }
    }
}
