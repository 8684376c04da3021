//! Within-turn capture-chain enumeration and greedy move selection.

pub mod move_tree;
pub mod selector;


pub use move_tree::{all_chains_for_piece, CompleteMove};
pub use selector::{best_move_for, BestMove};
