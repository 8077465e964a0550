// src/graph/matrix.rs
//! Reusable square adjacency matrix, overwritten on each graph submission.

/// Row-major square buffer of edge weights.
///
/// Weight 0 means "no edge"; real edge weights are positive integers below
/// 2^32. Allocated once per session and refilled in place for every graph.
#[derive(Debug, Clone)]
pub struct AdjacencyBuffer {
    dim: usize,
    weights: Vec<u32>,
}

impl AdjacencyBuffer {
    /// Allocates a zeroed `dim x dim` buffer.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            weights: vec![0; dim * dim],
        }
    }

    /// Matrix dimension (vertices per graph).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Weight of the edge `row -> col`, 0 when absent.
    #[must_use]
    pub fn weight(&self, row: usize, col: usize) -> u32 {
        self.weights[row * self.dim + col]
    }

    /// Overwrites one row in place. `row_weights` must hold exactly `dim`
    /// entries; callers guarantee this by contract.
    pub fn fill_row(&mut self, row: usize, row_weights: &[u32]) {
        debug_assert_eq!(row_weights.len(), self.dim);
        let start = row * self.dim;
        self.weights[start..start + self.dim].copy_from_slice(row_weights);
    }

    /// Overwrites the whole buffer from `dim * dim` row-major weights.
    pub fn fill(&mut self, source: &[u32]) {
        debug_assert_eq!(source.len(), self.dim * self.dim);
        self.weights.copy_from_slice(source);
    }
}
