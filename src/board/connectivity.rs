//! Per-cell connectivity, computed once at board construction.
//!
//! The board is a graph, not a coordinate grid: a strong intersection carries
//! lines in all eight directions, a weak intersection only orthogonally.
//! Every legality and capture question downstream walks these precomputed
//! adjacency lists instead of doing coordinate arithmetic.

use smallvec::SmallVec;

use super::direction::Direction;

/// Whether an intersection carries diagonal lines. Fixed by index parity at
/// construction time and immutable for the life of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellClass {
    Strong,
    Weak,
}

impl CellClass {
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            CellClass::Strong
        } else {
            CellClass::Weak
        }
    }
}

/// One edge of the board graph: the neighboring cell reached by stepping in
/// `direction`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Connection {
    pub index: usize,
    pub direction: Direction,
}

pub type ConnectionList = SmallVec<[Connection; 8]>;

/// Computes the fixed neighbor list for one cell, in ascending direction
/// order. A direction is dropped when it would cross a board edge; the edge
/// tests are index arithmetic against `columns` so a step can never wrap
/// from one row onto the next.
pub fn connections(index: usize, class: CellClass, rows: usize, columns: usize) -> ConnectionList {
    let is_top_edge = index < columns;
    let is_left_edge = index % columns == 0;
    let is_right_edge = (index + 1) % columns == 0;
    let is_bottom_edge = index >= (rows - 1) * columns;

    let candidates: &[Direction] = match class {
        CellClass::Strong => &Direction::ALL,
        CellClass::Weak => &Direction::ORTHOGONAL,
    };

    let mut list = ConnectionList::new();
    for &direction in candidates {
        if (is_top_edge && direction.points_up())
            || (is_left_edge && direction.points_left())
            || (is_right_edge && direction.points_right())
            || (is_bottom_edge && direction.points_down())
        {
            continue;
        }
        let target = (index as isize + direction.delta(columns)) as usize;
        list.push(Connection {
            index: target,
            direction,
        });
    }
    list
}
