use super::connectivity::{self, CellClass, Connection};
use super::piece::PieceType;

/// A single intersection: fixed identity and connectivity, mutable occupancy.
/// All move and capture decisions live on `Board`; a cell only knows what
/// stands on it and which cells it is wired to.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    index: usize,
    class: CellClass,
    piece: PieceType,
    connections: connectivity::ConnectionList,
}

impl Cell {
    pub fn new(index: usize, piece: PieceType, rows: usize, columns: usize) -> Self {
        let class = CellClass::from_index(index);
        Self {
            index,
            class,
            piece,
            connections: connectivity::connections(index, class, rows, columns),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn class(&self) -> CellClass {
        self.class
    }

    pub fn piece(&self) -> PieceType {
        self.piece
    }

    pub fn set_piece(&mut self, piece: PieceType) {
        self.piece = piece;
    }

    pub fn is_piece(&self, piece: PieceType) -> bool {
        self.piece == piece
    }

    pub fn remove_piece(&mut self) {
        self.piece = PieceType::Empty;
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_mutation() {
        let mut cell = Cell::new(4, PieceType::White, 3, 3);
        assert!(cell.is_piece(PieceType::White));

        cell.set_piece(PieceType::Black);
        assert_eq!(cell.piece(), PieceType::Black);

        cell.remove_piece();
        assert!(cell.is_piece(PieceType::Empty));
    }

    #[test]
    fn test_class_and_connections_are_fixed_by_index() {
        let strong = Cell::new(4, PieceType::Empty, 3, 3);
        assert_eq!(strong.class(), CellClass::Strong);
        assert_eq!(strong.connections().len(), 8);

        let weak = Cell::new(1, PieceType::Empty, 3, 3);
        assert_eq!(weak.class(), CellClass::Weak);
        assert_eq!(weak.connections().len(), 3);
    }
}
