//! Graph traversal expressed through the product kernels.

pub mod bfs;

pub use bfs::breadth_first_search;
