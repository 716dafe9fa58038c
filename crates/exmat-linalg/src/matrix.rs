//! Dense matrix container.
//!
//! Entries are stored row-major. Every public operation returns a new
//! matrix or mutates one the caller owns; algorithms work on private copies.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::element::Element;
use crate::error::{LinalgError, Result};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<E> {
    /// Matrix entries in row-major order.
    pub(crate) data: Vec<E>,
    /// Number of rows.
    pub(crate) num_rows: usize,
    /// Number of columns.
    pub(crate) num_cols: usize,
}

fn check_shape(op: &'static str, num_rows: usize, num_cols: usize) -> Result<()> {
    if num_rows == 0 || num_cols == 0 {
        return Err(LinalgError::invalid(
            op,
            format!("matrix dimensions must be positive, got {num_rows}x{num_cols}"),
        ));
    }
    Ok(())
}

impl<E: Element> Matrix<E> {
    /// Creates a matrix filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero.
    pub fn zeros(num_rows: usize, num_cols: usize) -> Result<Self> {
        check_shape("zeros", num_rows, num_cols)?;
        Ok(Self {
            data: vec![E::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix whose entry `(r, c)` is `f(r, c)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero.
    pub fn from_fn(
        num_rows: usize,
        num_cols: usize,
        mut f: impl FnMut(usize, usize) -> E,
    ) -> Result<Self> {
        check_shape("from_fn", num_rows, num_cols)?;
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for r in 0..num_rows {
            for c in 0..num_cols {
                data.push(f(r, c));
            }
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from nested rows.
    ///
    /// Short rows are padded with zeros up to the longest row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if there are no rows or all rows are empty.
    pub fn from_rows(rows: Vec<Vec<E>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        check_shape("from_rows", num_rows, num_cols)?;
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            let pad = num_cols - row.len();
            data.extend(row);
            data.extend(std::iter::repeat_with(E::zero).take(pad));
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from nested rows of equal length.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for ragged or empty input.
    pub fn from_rows_exact(rows: Vec<Vec<E>>) -> Result<Self> {
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|r| r.len() != num_cols) {
            return Err(LinalgError::invalid(
                "from_rows_exact",
                format!("row {bad} has {} entries, expected {num_cols}", rows[bad].len()),
            ));
        }
        Self::from_rows(rows)
    }

    /// Creates a matrix from a flat row-major entry list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the entry count is not
    /// `num_rows * num_cols` or a dimension is zero.
    pub fn from_row_major(num_rows: usize, num_cols: usize, data: Vec<E>) -> Result<Self> {
        check_shape("from_row_major", num_rows, num_cols)?;
        if data.len() != num_rows * num_cols {
            return Err(LinalgError::invalid(
                "from_row_major",
                format!(
                    "expected {} entries for a {num_rows}x{num_cols} matrix, got {}",
                    num_rows * num_cols,
                    data.len()
                ),
            ));
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// The `(rows, cols, row-major entries)` triple this matrix archives as.
    #[must_use]
    pub fn to_row_major(&self) -> (usize, usize, Vec<E>) {
        (self.num_rows, self.num_cols, self.data.clone())
    }

    /// Creates an identity matrix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `n` is zero.
    pub fn identity(n: usize) -> Result<Self> {
        Self::unit(n, n)
    }

    /// Creates a rectangular matrix with ones on the main diagonal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero.
    pub fn unit(num_rows: usize, num_cols: usize) -> Result<Self> {
        Self::from_fn(num_rows, num_cols, |r, c| if r == c { E::one() } else { E::zero() })
    }

    /// Creates a square diagonal matrix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `entries` is empty.
    pub fn diagonal(entries: Vec<E>) -> Result<Self> {
        let mut m = Self::zeros(entries.len(), entries.len())?;
        for (i, e) in entries.into_iter().enumerate() {
            m[(i, i)] = e;
        }
        Ok(m)
    }

    /// Creates a matrix of distinct symbols named after `base_name`.
    ///
    /// Entry `(i, j)` is named `base_name` followed by `ij`, by `_i_j` when a
    /// dimension exceeds 10, or by the single running index for a single
    /// row or column.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a zero dimension or a base name that
    /// does not produce valid symbol names.
    pub fn symbolic(num_rows: usize, num_cols: usize, base_name: &str) -> Result<Self> {
        check_shape("symbolic", num_rows, num_cols)?;
        let long_format = num_rows > 10 || num_cols > 10;
        let single = num_rows == 1 || num_cols == 1;
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for r in 0..num_rows {
            for c in 0..num_cols {
                let name = if single {
                    format!("{base_name}{}", if num_cols == 1 { r } else { c })
                } else if long_format {
                    format!("{base_name}_{r}_{c}")
                } else {
                    format!("{base_name}{r}{c}")
                };
                let sym = E::named_symbol(&name).ok_or_else(|| {
                    LinalgError::invalid("symbolic", format!("invalid symbol name {name:?}"))
                })?;
                data.push(sym);
            }
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// All entries in row-major order.
    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.data
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[E] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    fn out_of_range(&self, op: &'static str, row: usize, col: usize) -> LinalgError {
        LinalgError::IndexOutOfRange {
            op,
            row,
            col,
            rows: self.num_rows,
            cols: self.num_cols,
        }
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<&E> {
        if row < self.num_rows && col < self.num_cols {
            Ok(&self.data[row * self.num_cols + col])
        } else {
            Err(self.out_of_range("get", row, col))
        }
    }

    /// Replaces the entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: E) -> Result<()> {
        if row < self.num_rows && col < self.num_cols {
            self.data[row * self.num_cols + col] = value;
            Ok(())
        } else {
            Err(self.out_of_range("set", row, col))
        }
    }

    /// The matrix with row `row` and column `col` deleted.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the indices lie outside the matrix or
    /// the matrix has fewer than two rows or columns.
    pub fn reduced(&self, row: usize, col: usize) -> Result<Self> {
        if row >= self.num_rows
            || col >= self.num_cols
            || self.num_rows < 2
            || self.num_cols < 2
        {
            return Err(self.out_of_range("reduced", row, col));
        }
        Self::from_fn(self.num_rows - 1, self.num_cols - 1, |r, c| {
            let r = if r < row { r } else { r + 1 };
            let c = if c < col { c } else { c + 1 };
            self[(r, c)].clone()
        })
    }

    /// The `nr x nc` block starting at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if the block leaves the matrix and
    /// `InvalidArgument` for an empty block.
    pub fn sub_matrix(&self, row: usize, nr: usize, col: usize, nc: usize) -> Result<Self> {
        let (Some(row_end), Some(col_end)) = (row.checked_add(nr), col.checked_add(nc)) else {
            return Err(self.out_of_range("sub_matrix", row, col));
        };
        if row_end > self.num_rows || col_end > self.num_cols {
            return Err(self.out_of_range("sub_matrix", row_end, col_end));
        }
        Self::from_fn(nr, nc, |r, c| self[(row + r, col + c)].clone())
    }

    fn check_same_shape(&self, op: &'static str, other: &Self) -> Result<()> {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return Err(LinalgError::DimensionMismatch {
                op,
                left_rows: self.num_rows,
                left_cols: self.num_cols,
                right_rows: other.num_rows,
                right_cols: other.num_cols,
            });
        }
        Ok(())
    }

    pub(crate) fn check_square(&self, op: &'static str) -> Result<()> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                op,
                rows: self.num_rows,
                cols: self.num_cols,
            });
        }
        Ok(())
    }

    /// Entrywise sum.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for differently shaped operands.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape("add", other)?;
        Ok(self.zip_with(other, |a, b| a.clone() + b.clone()))
    }

    /// Entrywise difference.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for differently shaped operands.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape("sub", other)?;
        Ok(self.zip_with(other, |a, b| a.clone() - b.clone()))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(&E, &E) -> E) -> Self {
        Self {
            data: self.data.iter().zip(&other.data).map(|(a, b)| f(a, b)).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Matrix product.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless `self.num_cols() == other.num_rows()`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.num_cols != other.num_rows {
            return Err(LinalgError::DimensionMismatch {
                op: "mul",
                left_rows: self.num_rows,
                left_cols: self.num_cols,
                right_rows: other.num_rows,
                right_cols: other.num_cols,
            });
        }
        let (n, p) = (self.num_cols, other.num_cols);
        let mut data = vec![E::zero(); self.num_rows * p];
        for r1 in 0..self.num_rows {
            for c in 0..n {
                let a = &self.data[r1 * n + c];
                if a.is_zero() {
                    continue;
                }
                for r2 in 0..p {
                    let slot = &mut data[r1 * p + r2];
                    let acc = std::mem::replace(slot, E::zero());
                    *slot = acc + a.clone() * other.data[c * p + r2].clone();
                }
            }
        }
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: p,
        })
    }

    /// Multiplies every entry by `scalar`.
    #[must_use]
    pub fn mul_scalar(&self, scalar: &E) -> Self {
        self.map(|e| e.clone() * scalar.clone())
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.num_cols {
            for r in 0..self.num_rows {
                data.push(self.data[r * self.num_cols + c].clone());
            }
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Applies `f` to every entry.
    #[must_use]
    pub fn map(&self, f: impl FnMut(&E) -> E) -> Self {
        Self {
            data: self.data.iter().map(f).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Applies a fallible `f` to every entry.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<F>(&self, f: F) -> Result<Self>
    where
        F: FnMut(&E) -> Result<E>,
    {
        Ok(Self {
            data: self.data.iter().map(f).collect::<Result<_>>()?,
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Maps entries, borrowing `self` when nothing changes.
    fn map_if_changed(&self, f: impl Fn(&E) -> E) -> Cow<'_, Self> {
        let mut changed: Option<Vec<E>> = None;
        for (i, e) in self.data.iter().enumerate() {
            let mapped = f(e);
            match changed.as_mut() {
                Some(data) => data.push(mapped),
                None if mapped != *e => {
                    let mut data = Vec::with_capacity(self.data.len());
                    data.extend_from_slice(&self.data[..i]);
                    data.push(mapped);
                    changed = Some(data);
                }
                None => {}
            }
        }
        match changed {
            None => Cow::Borrowed(self),
            Some(data) => Cow::Owned(Self {
                data,
                num_rows: self.num_rows,
                num_cols: self.num_cols,
            }),
        }
    }

    /// Entrywise complex conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Cow<'_, Self> {
        self.map_if_changed(E::conjugate)
    }

    /// Entrywise real part.
    #[must_use]
    pub fn real_part(&self) -> Cow<'_, Self> {
        self.map_if_changed(E::real_part)
    }

    /// Entrywise imaginary part.
    #[must_use]
    pub fn imag_part(&self) -> Cow<'_, Self> {
        self.map_if_changed(E::imag_part)
    }

    /// Returns true if every entry is exactly zero.
    #[must_use]
    pub fn is_zero_matrix(&self) -> bool {
        self.data.iter().all(E::is_zero)
    }

    /// Sum of the diagonal, normalized when it is a rational function.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a non-square matrix.
    pub fn trace(&self) -> Result<E> {
        self.check_square("trace")?;
        let tr = (0..self.num_rows).fold(E::zero(), |acc, i| acc + self[(i, i)].clone());
        if tr.is_rational_function() {
            Ok(tr.normal())
        } else {
            Ok(tr.expand())
        }
    }

    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.num_cols {
            self.data.swap(i * self.num_cols + k, j * self.num_cols + k);
        }
    }
}

impl<E> Index<(usize, usize)> for Matrix<E> {
    type Output = E;

    fn index(&self, (row, col): (usize, usize)) -> &E {
        assert!(row < self.num_rows && col < self.num_cols, "matrix index out of range");
        &self.data[row * self.num_cols + col]
    }
}

impl<E> IndexMut<(usize, usize)> for Matrix<E> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut E {
        assert!(row < self.num_rows && col < self.num_cols, "matrix index out of range");
        &mut self.data[row * self.num_cols + col]
    }
}

impl<E: Ord> Ord for Matrix<E> {
    /// Dimensions first, then entries in row-major order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.num_rows
            .cmp(&other.num_rows)
            .then_with(|| self.num_cols.cmp(&other.num_cols))
            .then_with(|| self.data.cmp(&other.data))
    }
}

impl<E: Ord> PartialOrd for Matrix<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: fmt::Display> fmt::Display for Matrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..self.num_rows {
            if r > 0 {
                write!(f, ",")?;
            }
            write!(f, "[")?;
            for c in 0..self.num_cols {
                if c > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", self.data[r * self.num_cols + c])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
