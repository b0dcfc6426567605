pub mod generator;
pub mod matrix;
pub mod variant;

pub use generator::{
    density_coefficient, generate_directed_matrix,
    generate_directed_matrix_with,
};
pub use matrix::{to_undirected, AdjacencyMatrix, MatrixError};
pub use variant::{Variant, VariantError};
