//! Range-minimum queries over the Euler depth sequence
//!
//! A sparse table stores, for every power-of-two window, the index of its
//! minimum. Any range `[l, r]` is covered by two such windows that may
//! overlap, which gives O(1) queries after O(m log m) preprocessing.

mod log_table;
mod sparse_table;

pub use log_table::LogTable;
pub use sparse_table::SparseTable;
