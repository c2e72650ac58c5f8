//! Dense matrices over any [`Field`]
//!
//! The matrix engine is the linear-algebra kernel behind Reed-Solomon
//! decoding: both the error-locator polynomial and the error magnitudes are
//! found by reducing an augmented matrix to reduced row-echelon form.
//!
//! A [`Matrix`] borrows its field instance and owns a row-major grid of
//! elements whose dimensions are fixed at creation. Elimination mutates the
//! grid in place.

use crate::field::{Field, FieldError};
use log::trace;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Zero rows or columns requested, or ragged input rows
    #[error("invalid matrix dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Inner dimensions of a product disagree
    #[error("dimension mismatch: left has {left_cols} columns, right has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    /// Operation requires a square matrix
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Matrix is singular
    #[error("matrix is not invertible")]
    NotInvertible,

    /// Underlying field arithmetic failed
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Type alias for Result with MatrixError
pub type Result<T> = std::result::Result<T, MatrixError>;

pub struct Matrix<'f, F: Field> {
    field: &'f F,
    values: Vec<Vec<F::Elem>>,
    cols: usize,
}

impl<'f, F: Field> Clone for Matrix<'f, F> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            values: self.values.clone(),
            cols: self.cols,
        }
    }
}

impl<'f, F: Field> fmt::Debug for Matrix<'f, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.row_count())
            .field("cols", &self.cols)
            .field("values", &self.values)
            .finish()
    }
}

impl<'f, F: Field> Matrix<'f, F> {
    /// Create a `rows x cols` matrix filled with the field's zero.
    pub fn new(rows: usize, cols: usize, field: &'f F) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            field,
            values: vec![vec![field.zero(); cols]; rows],
            cols,
        })
    }

    /// Build a matrix from row vectors. Every row must have the same,
    /// non-zero length and every entry must belong to `field`.
    pub fn from_rows(rows: Vec<Vec<F::Elem>>, field: &'f F) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if row_count == 0 || cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return Err(MatrixError::InvalidDimensions {
                rows: row_count,
                cols,
            });
        }
        for value in rows.iter().flatten() {
            field.check(value)?;
        }
        Ok(Self {
            field,
            values: rows,
            cols,
        })
    }

    pub fn identity(size: usize, field: &'f F) -> Result<Self> {
        let mut matrix = Self::new(size, size, field)?;
        for i in 0..size {
            matrix.set(i, i, field.one());
        }
        Ok(matrix)
    }

    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    pub fn field(&self) -> &'f F {
        self.field
    }

    /// Element at (row, col). Panics if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &F::Elem {
        &self.values[row][col]
    }

    /// Overwrite element at (row, col). Panics if out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: F::Elem) {
        self.values[row][col] = value;
    }

    pub fn row(&self, row: usize) -> &[F::Elem] {
        &self.values[row]
    }

    pub fn transpose(&self) -> Self {
        let values = (0..self.cols)
            .map(|j| self.values.iter().map(|row| row[j].clone()).collect())
            .collect();
        Self {
            field: self.field,
            values,
            cols: self.row_count(),
        }
    }

    /// Element-wise equality under the field's notion of equality.
    pub fn equals(&self, other: &Self) -> Result<bool> {
        if self.row_count() != other.row_count() || self.cols != other.cols {
            return Ok(false);
        }
        for (left, right) in self.values.iter().zip(&other.values) {
            for (x, y) in left.iter().zip(right) {
                if !self.field.equals(x, y)? {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    pub fn swap_rows(&mut self, row0: usize, row1: usize) {
        self.values.swap(row0, row1);
    }

    /// row *= factor
    pub fn multiply_row(&mut self, row: usize, factor: &F::Elem) -> Result<()> {
        let field = self.field;
        for value in &mut self.values[row] {
            *value = field.multiply(value, factor)?;
        }
        Ok(())
    }

    /// dest_row += src_row * factor
    pub fn add_rows(&mut self, src_row: usize, dest_row: usize, factor: &F::Elem) -> Result<()> {
        let field = self.field;
        for j in 0..self.cols {
            let product = field.multiply(&self.values[src_row][j], factor)?;
            self.values[dest_row][j] = field.add(&self.values[dest_row][j], &product)?;
        }
        Ok(())
    }

    /// Matrix product `self * other`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.row_count() {
            return Err(MatrixError::DimensionMismatch {
                left_cols: self.cols,
                right_rows: other.row_count(),
            });
        }
        let field = self.field;
        let mut result = Self::new(self.row_count(), other.cols, field)?;
        for i in 0..self.row_count() {
            for j in 0..other.cols {
                let mut sum = field.zero();
                for k in 0..self.cols {
                    let product = field.multiply(self.get(i, k), other.get(k, j))?;
                    sum = field.add(&sum, &product)?;
                }
                result.set(i, j, sum);
            }
        }
        Ok(result)
    }

    /// Index of the first row at or below `start` with a non-zero entry in `col`.
    fn find_pivot(&self, start: usize, col: usize) -> Result<Option<usize>> {
        for row in start..self.row_count() {
            if !self.field.is_zero(self.get(row, col))? {
                return Ok(Some(row));
            }
        }
        Ok(None)
    }

    /// Reduce in place to reduced row-echelon form.
    ///
    /// Columns without a pivot are skipped. Afterwards every pivot equals one
    /// and is the only non-zero entry in its column. Returns the number of
    /// pivots (the rank).
    pub fn reduced_row_echelon_form(&mut self) -> Result<usize> {
        let field = self.field;
        let rows = self.row_count();

        // Forward pass: unit pivots, zeros below
        let mut num_pivots = 0;
        for j in 0..self.cols {
            if num_pivots >= rows {
                break;
            }
            let Some(pivot_row) = self.find_pivot(num_pivots, j)? else {
                continue;
            };
            self.swap_rows(num_pivots, pivot_row);
            let pivot_row = num_pivots;
            num_pivots += 1;

            let inverse = field.reciprocal(self.get(pivot_row, j))?;
            self.multiply_row(pivot_row, &inverse)?;

            for i in (pivot_row + 1)..rows {
                let factor = field.negate(self.get(i, j))?;
                self.add_rows(pivot_row, i, &factor)?;
            }
        }

        // Backward pass: zeros above each pivot
        for i in (0..num_pivots).rev() {
            let mut pivot_col = None;
            for j in 0..self.cols {
                if !field.is_zero(self.get(i, j))? {
                    pivot_col = Some(j);
                    break;
                }
            }
            let Some(pivot_col) = pivot_col else {
                continue;
            };
            for k in 0..i {
                let factor = field.negate(self.get(k, pivot_col))?;
                self.add_rows(i, k, &factor)?;
            }
        }

        trace!(
            "RREF of {}x{} matrix: rank {}",
            rows,
            self.cols,
            num_pivots
        );
        Ok(num_pivots)
    }

    /// Invert a square matrix in place via elimination on `[A | I]`.
    ///
    /// # Errors
    /// [`MatrixError::NotSquare`], or [`MatrixError::NotInvertible`] if the
    /// left half does not reduce to the identity. `self` is left untouched on
    /// error.
    pub fn invert(&mut self) -> Result<()> {
        let n = self.row_count();
        if n != self.cols {
            return Err(MatrixError::NotSquare {
                rows: n,
                cols: self.cols,
            });
        }
        let field = self.field;

        let mut augmented = Self::new(n, n * 2, field)?;
        for i in 0..n {
            for j in 0..n {
                augmented.set(i, j, self.get(i, j).clone());
                let identity = if i == j { field.one() } else { field.zero() };
                augmented.set(i, j + n, identity);
            }
        }

        augmented.reduced_row_echelon_form()?;

        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { field.one() } else { field.zero() };
                if !field.equals(augmented.get(i, j), &expected)? {
                    return Err(MatrixError::NotInvertible);
                }
            }
        }
        for (i, row) in augmented.values.into_iter().enumerate() {
            self.values[i] = row.into_iter().skip(n).collect();
        }
        Ok(())
    }

    /// Returns the inverse as a new matrix, leaving `self` unchanged.
    pub fn inverse(&self) -> Result<Self> {
        let mut inverse = self.clone();
        inverse.invert()?;
        Ok(inverse)
    }

    /// Determinant by forward elimination on a clone.
    ///
    /// The running product picks up each pivot before its row is scaled to a
    /// unit pivot, and flips sign on every row swap. A singular matrix yields
    /// the field's zero rather than an error.
    pub fn determinant(&self) -> Result<F::Elem> {
        let n = self.row_count();
        if n != self.cols {
            return Err(MatrixError::NotSquare {
                rows: n,
                cols: self.cols,
            });
        }
        let field = self.field;
        let mut work = self.clone();
        let mut det = field.one();
        let mut num_pivots = 0;

        for j in 0..n {
            let Some(pivot_row) = work.find_pivot(num_pivots, j)? else {
                continue;
            };
            if pivot_row != num_pivots {
                work.swap_rows(num_pivots, pivot_row);
                det = field.negate(&det)?;
            }

            let pivot = work.get(num_pivots, j).clone();
            det = field.multiply(&det, &pivot)?;
            work.multiply_row(num_pivots, &field.reciprocal(&pivot)?)?;

            for i in (num_pivots + 1)..n {
                let factor = field.negate(work.get(i, j))?;
                work.add_rows(num_pivots, i, &factor)?;
            }
            num_pivots += 1;
        }

        if num_pivots < n {
            return Ok(field.zero());
        }
        Ok(det)
    }
}

impl<'f, F: Field> fmt::Display for Matrix<'f, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value:?}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
