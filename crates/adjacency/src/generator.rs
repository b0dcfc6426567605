use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::matrix::AdjacencyMatrix;

/// Edge density factor `k = 1 - 0.02·n3 - 0.005·n4 - 0.25`.
///
/// A cell is set when `uniform(0, 2) * k >= 1`, so `k` below 0.5 yields an
/// empty graph and larger values make edges more likely.
pub fn density_coefficient(n3: u32, n4: u32) -> f64 {
    1.0 - f64::from(n3) * 0.02 - f64::from(n4) * 0.005 - 0.25
}

/// Seeded directed adjacency matrix.
///
/// Every call builds its own generator from `seed`, so the same
/// `(size, seed, n3, n4)` always gives the same matrix.
pub fn generate_directed_matrix(
    size: usize,
    seed: u64,
    n3: u32,
    n4: u32,
) -> AdjacencyMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    debug!(size, seed, n3, n4, "generating directed matrix");
    generate_directed_matrix_with(&mut rng, size, n3, n4)
}

/// Same as [`generate_directed_matrix`] but drawing from a caller-owned rng.
///
/// Draws happen in row-major order, one per cell including the diagonal.
pub fn generate_directed_matrix_with<R: Rng>(
    rng: &mut R,
    size: usize,
    n3: u32,
    n4: u32,
) -> AdjacencyMatrix {
    let k = density_coefficient(n3, n4);
    let matrix = AdjacencyMatrix::from_fn(size, |_, _| {
        rng.random_range(0.0f64..2.0) * k >= 1.0
    });
    debug!(k, edges = matrix.edge_count(), "directed matrix ready");
    matrix
}
