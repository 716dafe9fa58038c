//! Thresholds for automatic algorithm selection.

/// Configuration for automatic algorithm selection.
///
/// Ratios are `(numerator, denominator)` pairs compared in integer
/// arithmetic against cell counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Numeric matrices with more cells than this may use Markowitz.
    pub markowitz_min_cells: usize,
    /// Numeric matrices use Markowitz only below this nonzero density.
    pub numeric_sparse_ratio: (usize, usize),
    /// Symbolic matrices with fewer cells than this may count as dense.
    pub dense_max_cells: usize,
    /// Symbolic matrices above this nonzero density count as dense.
    pub dense_ratio: (usize, usize),
    /// Dense symbolic matrices up to this many cells use division-free
    /// elimination.
    pub divfree_max_cells: usize,
    /// Determinants switch from minor expansion to Bareiss above this
    /// dimension when sparse enough.
    pub bareiss_min_dimension: usize,
    /// A determinant counts as sparse when
    /// `sparsity_factor * nonzeros <= cells`.
    pub sparsity_factor: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            markowitz_min_cells: 200,
            numeric_sparse_ratio: (1, 2),
            dense_max_cells: 120,
            dense_ratio: (3, 5),
            divfree_max_cells: 12,
            bareiss_min_dimension: 3,
            sparsity_factor: 5,
        }
    }
}
