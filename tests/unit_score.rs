// tests/unit_score.rs
//! Scoring properties: relabeling invariance and the unreachable-is-zero
//! rule, exercised through the public API.

use graphrank_core::graph::{AdjacencyBuffer, ShortestPathScorer};

fn score_of(dim: usize, weights: &[u32]) -> u64 {
    let mut buf = AdjacencyBuffer::new(dim);
    buf.fill(weights);
    ShortestPathScorer::new(dim).score(&buf)
}

/// Applies a permutation of vertices `1..dim` (index 0 stays fixed) to a
/// row-major matrix: `perm[i]` is the new label of vertex `i`.
fn relabel(dim: usize, weights: &[u32], perm: &[usize]) -> Vec<u32> {
    let mut out = vec![0; dim * dim];
    for r in 0..dim {
        for c in 0..dim {
            out[perm[r] * dim + perm[c]] = weights[r * dim + c];
        }
    }
    out
}

#[test]
fn test_score_invariant_under_relabeling() {
    #[rustfmt::skip]
    let w = [
        0, 3, 0, 9, 0,
        0, 0, 2, 0, 0,
        0, 0, 0, 1, 6,
        0, 0, 0, 0, 2,
        5, 0, 0, 0, 0,
    ];
    let base = score_of(5, &w);
    for perm in [
        [0, 2, 1, 3, 4],
        [0, 4, 3, 2, 1],
        [0, 3, 4, 1, 2],
        [0, 1, 2, 4, 3],
    ] {
        let relabeled = relabel(5, &w, &perm);
        assert_eq!(score_of(5, &relabeled), base, "permutation {perm:?}");
    }
}

#[test]
fn test_partially_reachable_graph() {
    // Vertices 3 and 4 sit in a component the source never reaches; they
    // contribute 0 each while 1 and 2 contribute real distances.
    #[rustfmt::skip]
    let w = [
        0, 2, 0, 0, 0,
        0, 0, 4, 0, 0,
        0, 0, 0, 0, 0,
        0, 0, 0, 0, 1,
        0, 0, 0, 1, 0,
    ];
    assert_eq!(score_of(5, &w), 2 + 6);
}

#[test]
fn test_single_vertex_graph_scores_zero() {
    assert_eq!(score_of(1, &[0]), 0);
}

#[test]
fn test_dense_uniform_graph() {
    // Complete digraph, all weights 1: every non-source vertex is one hop
    // away.
    let dim = 6;
    let mut w = vec![1; dim * dim];
    for i in 0..dim {
        w[i * dim + i] = 0;
    }
    assert_eq!(score_of(dim, &w), (dim as u64) - 1);
}
