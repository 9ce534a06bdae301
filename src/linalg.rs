//! Matrix products, transposition and row/column permutations.

use strided_kernel as kernel;
use strided_view::layout::normalize_index;
use strided_view::{Storage, StorageMut};

use crate::matrix::{Matrix, MatrixBase};
use crate::vector::{Vector, VectorBase};
use crate::Result;

impl<S: Storage> MatrixBase<S> {
    /// Matrix product `self * other` into a fresh matrix.
    pub fn matmul<T: Storage>(&self, other: &MatrixBase<T>) -> Result<Matrix> {
        let mut c = Matrix::zeros(self.rows(), other.cols())?;
        kernel::gemm(&mut c.strided_mut(), &self.strided(), &other.strided(), 1.0, 0.0)?;
        Ok(c)
    }

    /// Matrix-vector product `self * v`.
    pub fn matvec<T: Storage>(&self, v: &VectorBase<T>) -> Result<Vector> {
        let mut y = Vector::zeros(self.rows())?;
        kernel::gemv(&mut y.strided_mut(), &self.strided(), &v.strided(), 1.0, 0.0)?;
        Ok(y)
    }

    /// Fresh `cols x rows` transpose.
    pub fn transpose(&self) -> Result<Matrix> {
        let mut t = Matrix::new(self.cols(), self.rows())?;
        kernel::transpose_into(&mut t.strided_mut(), &self.strided())?;
        Ok(t)
    }
}

impl<S: StorageMut> MatrixBase<S> {
    /// Transpose a square matrix in place.
    pub fn transpose_in_place(&mut self) -> Result<&mut Self> {
        kernel::transpose_in_place(&mut self.strided_mut())?;
        Ok(self)
    }

    /// Exchange rows `i` and `j`.
    pub fn swap_rows(&mut self, i: isize, j: isize) -> Result<&mut Self> {
        let i = normalize_index(i, self.rows())?;
        let j = normalize_index(j, self.rows())?;
        kernel::swap_rows(&mut self.strided_mut(), i, j)?;
        Ok(self)
    }

    /// Exchange columns `i` and `j`.
    pub fn swap_columns(&mut self, i: isize, j: isize) -> Result<&mut Self> {
        let i = normalize_index(i, self.cols())?;
        let j = normalize_index(j, self.cols())?;
        kernel::swap_columns(&mut self.strided_mut(), i, j)?;
        Ok(self)
    }

    /// Exchange row `i` with column `j` of a square matrix.
    pub fn swap_row_column(&mut self, i: isize, j: isize) -> Result<&mut Self> {
        let i = normalize_index(i, self.rows())?;
        let j = normalize_index(j, self.cols())?;
        kernel::swap_row_column(&mut self.strided_mut(), i, j)?;
        Ok(self)
    }
}
