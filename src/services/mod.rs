pub mod backend;
pub mod graph;
