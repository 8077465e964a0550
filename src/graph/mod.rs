// src/graph/mod.rs
//! Adjacency storage and the shortest-path scoring routine.

pub mod matrix;
pub mod score;

pub use matrix::AdjacencyBuffer;
pub use score::ShortestPathScorer;
