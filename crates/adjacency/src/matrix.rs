use ndarray::Array2;
use std::fmt::{self, Write as _};

/// Binary adjacency matrix: cell `(i, j) == 1` is an edge from `i` to `j`.
///
/// Storage is always rectangular. Matrices coming out of the generator are
/// square; `from_rows` also accepts rectangular input so callers can hit the
/// structural checks downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    values: Array2<u8>,
}

impl AdjacencyMatrix {
    /// Square matrix of the given size with no edges.
    pub fn empty(size: usize) -> Self {
        Self {
            values: Array2::zeros((size, size)),
        }
    }

    /// Square matrix whose cells are produced by `f(row, col)`.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        Self {
            values: Array2::from_shape_fn((size, size), |(i, j)| u8::from(f(i, j))),
        }
    }

    /// Builds a matrix from row vectors, checking they are rectangular and 0/1.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(MatrixError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            if let Some((col, &value)) =
                values.iter().enumerate().find(|(_, v)| **v > 1)
            {
                return Err(MatrixError::NotBinary { row, col, value });
            }
        }
        let values = Array2::from_shape_fn((rows.len(), cols), |(i, j)| rows[i][j]);
        Ok(Self { values })
    }

    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// Node count. Only meaningful for square matrices.
    pub fn size(&self) -> usize {
        self.rows()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn ensure_square(&self) -> Result<(), MatrixError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    /// Cell value, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.values.get((row, col)).copied()
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get(from, to) == Some(1)
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && self
                .values
                .indexed_iter()
                .all(|((i, j), &v)| self.values[[j, i]] == v)
    }

    /// Cells set to 1, in row-major order (self-loops included).
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.values
            .indexed_iter()
            .filter(|(_, v)| **v == 1)
            .map(|(ix, _)| ix)
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Row vectors, the shape used for export.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.values.rows().into_iter().map(|r| r.to_vec()).collect()
    }

    /// Undirected derivative: `(i, j)` is set iff `(i, j)` or `(j, i)` is.
    pub fn to_undirected(&self) -> Result<AdjacencyMatrix, MatrixError> {
        self.ensure_square()?;
        let m = &self.values;
        Ok(Self::from_fn(self.size(), |i, j| {
            m[[i, j]] == 1 || m[[j, i]] == 1
        }))
    }

    /// Console dump: a blank line, `title:`, then one space-separated row per line.
    pub fn dump(&self, title: &str) -> String {
        let mut out = format!("\n{title}:\n");
        for row in self.values.rows() {
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            // writing into a String cannot fail
            let _ = writeln!(out, "{}", line.join(" "));
        }
        out
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.values.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Free-function form of [`AdjacencyMatrix::to_undirected`].
pub fn to_undirected(matrix: &AdjacencyMatrix) -> Result<AdjacencyMatrix, MatrixError> {
    matrix.to_undirected()
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matrix is not square ({rows} rows, {cols} columns)")]
    NotSquare { rows: usize, cols: usize },
    #[error("row {row} has {found} values, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    NotBinary { row: usize, col: usize, value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(vec![
            vec![0, 1, 0],
            vec![0, 1, 1],
            vec![1, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_to_undirected_mirrors_edges() {
        let u = sample().to_undirected().unwrap();
        assert_eq!(
            u.to_rows(),
            vec![vec![0, 1, 1], vec![1, 1, 1], vec![1, 1, 0]]
        );
        assert!(u.is_symmetric());
    }

    #[test]
    fn test_to_undirected_leaves_input_untouched() {
        let m = sample();
        let before = m.clone();
        let _ = m.to_undirected().unwrap();
        assert_eq!(m, before);
        assert!(!m.is_symmetric());
    }

    #[test]
    fn test_to_undirected_rejects_rectangular() {
        let m = AdjacencyMatrix::from_rows(vec![vec![0, 1, 0], vec![1, 0, 0]])
            .unwrap();
        assert_eq!(
            m.to_undirected(),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_non_binary() {
        let ragged = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![1]]);
        assert_eq!(
            ragged,
            Err(MatrixError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );

        let wide = AdjacencyMatrix::from_rows(vec![vec![0, 2], vec![1, 0]]);
        assert_eq!(
            wide,
            Err(MatrixError::NotBinary {
                row: 0,
                col: 1,
                value: 2
            })
        );
    }

    #[test]
    fn test_edges_are_row_major() {
        let edges: Vec<_> = sample().edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 1), (1, 2), (2, 0)]);
        assert_eq!(sample().edge_count(), 4);
    }

    #[test]
    fn test_dump_format() {
        let dump = sample().dump("Directed adjacency matrix");
        assert_eq!(
            dump,
            "\nDirected adjacency matrix:\n0 1 0\n0 1 1\n1 0 0\n"
        );
        assert_eq!(AdjacencyMatrix::empty(0).dump("Empty"), "\nEmpty:\n");
        assert_eq!(sample().to_string(), "0 1 0\n0 1 1\n1 0 0");
    }

    fn square_matrix() -> impl Strategy<Value = AdjacencyMatrix> {
        (0usize..12).prop_flat_map(|n| {
            prop::collection::vec(0u8..=1, n * n).prop_map(move |cells| {
                AdjacencyMatrix::from_fn(n, |i, j| cells[i * n + j] == 1)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_undirected_is_symmetric(m in square_matrix()) {
            let u = m.to_undirected().unwrap();
            prop_assert!(u.is_symmetric());
        }

        #[test]
        fn prop_undirected_is_exact_union(m in square_matrix()) {
            let u = m.to_undirected().unwrap();
            let n = m.size();
            for i in 0..n {
                for j in 0..n {
                    let expected = m.has_edge(i, j) || m.has_edge(j, i);
                    prop_assert_eq!(u.has_edge(i, j), expected);
                }
            }
        }
    }
}
