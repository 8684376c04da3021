use std::fmt;

use termion::color;

use super::piece::PieceType;
use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.columns() {
                let index = row * self.columns() + col;
                match self.piece_at(index) {
                    Some(PieceType::White) => write!(
                        f,
                        "{}W{} ",
                        color::Fg(color::White),
                        color::Fg(color::Reset)
                    )?,
                    Some(PieceType::Black) => write!(
                        f,
                        "{}B{} ",
                        color::Fg(color::Red),
                        color::Fg(color::Reset)
                    )?,
                    _ => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
