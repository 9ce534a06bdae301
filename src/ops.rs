//! Arithmetic operators for vectors and matrices.
//!
//! Every operator allocates its result and returns `Result`, since operand
//! sizes are only known at run time. Owned left operands are reused instead
//! of copied.
//!
//! | expression        | meaning                         | output           |
//! |-------------------|---------------------------------|------------------|
//! | `&v op x`         | broadcast scalar                | `Result<Vector>` |
//! | `&v op &w`        | elementwise, equal lengths      | `Result<Vector>` |
//! | `&v ^ &w`         | dot product                     | `Result<f64>`    |
//! | `&v * &m`         | `v` as a row matrix times `m`   | `Result<Matrix>` |
//! | `&m op x`         | broadcast scalar                | `Result<Matrix>` |
//! | `&m +,-,/ &n`     | elementwise, equal shapes       | `Result<Matrix>` |
//! | `&m +,-,/ &v`     | `v` as a single-row matrix      | `Result<Matrix>` |
//! | `&m * &n`         | matrix product                  | `Result<Matrix>` |
//! | `&m * &v`         | matrix-vector product           | `Result<Vector>` |
//! | `&m ^ &n`         | elementwise product             | `Result<Matrix>` |

use std::ops::{Add, BitXor, Div, Mul, Sub};

use strided_view::Storage;

use crate::matrix::{Matrix, MatrixBase};
use crate::vector::{Vector, VectorBase};
use crate::Result;

macro_rules! impl_vector_elementwise {
    ($Trait:ident, $method:ident, $in_place:ident) => {
        impl<S: Storage> $Trait<f64> for &VectorBase<S> {
            type Output = Result<Vector>;

            fn $method(self, rhs: f64) -> Result<Vector> {
                let mut out = self.to_vector()?;
                out.$in_place(rhs)?;
                Ok(out)
            }
        }

        impl<S: Storage, T: Storage> $Trait<&VectorBase<T>> for &VectorBase<S> {
            type Output = Result<Vector>;

            fn $method(self, rhs: &VectorBase<T>) -> Result<Vector> {
                let mut out = self.to_vector()?;
                out.$in_place(rhs)?;
                Ok(out)
            }
        }

        impl $Trait<f64> for Vector {
            type Output = Result<Vector>;

            fn $method(mut self, rhs: f64) -> Result<Vector> {
                self.$in_place(rhs)?;
                Ok(self)
            }
        }

        impl<T: Storage> $Trait<&VectorBase<T>> for Vector {
            type Output = Result<Vector>;

            fn $method(mut self, rhs: &VectorBase<T>) -> Result<Vector> {
                self.$in_place(rhs)?;
                Ok(self)
            }
        }

        // scalar on the left: promote it to a filled vector first
        impl<S: Storage> $Trait<&VectorBase<S>> for f64 {
            type Output = Result<Vector>;

            fn $method(self, rhs: &VectorBase<S>) -> Result<Vector> {
                let (lhs, _) = rhs.coerce(self)?;
                $Trait::$method(lhs, rhs)
            }
        }
    };
}

impl_vector_elementwise!(Add, add, add_in_place);
impl_vector_elementwise!(Sub, sub, sub_in_place);
impl_vector_elementwise!(Mul, mul, mul_in_place);
impl_vector_elementwise!(Div, div, div_in_place);

/// Dot product.
impl<S: Storage, T: Storage> BitXor<&VectorBase<T>> for &VectorBase<S> {
    type Output = Result<f64>;

    fn bitxor(self, rhs: &VectorBase<T>) -> Result<f64> {
        self.dot(rhs)
    }
}

/// Row vector times matrix.
impl<S: Storage, T: Storage> Mul<&MatrixBase<T>> for &VectorBase<S> {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &MatrixBase<T>) -> Result<Matrix> {
        self.to_matrix()?.matmul(rhs)
    }
}

macro_rules! impl_matrix_elementwise {
    ($Trait:ident, $method:ident, $in_place:ident) => {
        impl<S: Storage> $Trait<f64> for &MatrixBase<S> {
            type Output = Result<Matrix>;

            fn $method(self, rhs: f64) -> Result<Matrix> {
                let mut out = self.to_matrix()?;
                out.$in_place(rhs)?;
                Ok(out)
            }
        }

        impl $Trait<f64> for Matrix {
            type Output = Result<Matrix>;

            fn $method(mut self, rhs: f64) -> Result<Matrix> {
                self.$in_place(rhs)?;
                Ok(self)
            }
        }
    };
    ($Trait:ident, $method:ident, $in_place:ident, with_operands) => {
        impl_matrix_elementwise!($Trait, $method, $in_place);

        impl<S: Storage, T: Storage> $Trait<&MatrixBase<T>> for &MatrixBase<S> {
            type Output = Result<Matrix>;

            fn $method(self, rhs: &MatrixBase<T>) -> Result<Matrix> {
                let mut out = self.to_matrix()?;
                out.$in_place(rhs)?;
                Ok(out)
            }
        }

        impl<T: Storage> $Trait<&MatrixBase<T>> for Matrix {
            type Output = Result<Matrix>;

            fn $method(mut self, rhs: &MatrixBase<T>) -> Result<Matrix> {
                self.$in_place(rhs)?;
                Ok(self)
            }
        }

        impl<S: Storage, T: Storage> $Trait<&VectorBase<T>> for &MatrixBase<S> {
            type Output = Result<Matrix>;

            fn $method(self, rhs: &VectorBase<T>) -> Result<Matrix> {
                let mut out = self.to_matrix()?;
                out.$in_place(rhs)?;
                Ok(out)
            }
        }

        impl<S: Storage> $Trait<&MatrixBase<S>> for f64 {
            type Output = Result<Matrix>;

            fn $method(self, rhs: &MatrixBase<S>) -> Result<Matrix> {
                let (lhs, _) = rhs.coerce(self)?;
                $Trait::$method(lhs, rhs)
            }
        }
    };
}

impl_matrix_elementwise!(Add, add, add_in_place, with_operands);
impl_matrix_elementwise!(Sub, sub, sub_in_place, with_operands);
impl_matrix_elementwise!(Div, div, div_in_place, with_operands);
impl_matrix_elementwise!(Mul, mul, mul_in_place);
impl_matrix_elementwise!(BitXor, bitxor, mul_in_place);

/// Matrix product.
impl<S: Storage, T: Storage> Mul<&MatrixBase<T>> for &MatrixBase<S> {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &MatrixBase<T>) -> Result<Matrix> {
        self.matmul(rhs)
    }
}

/// Matrix-vector product.
impl<S: Storage, T: Storage> Mul<&VectorBase<T>> for &MatrixBase<S> {
    type Output = Result<Vector>;

    fn mul(self, rhs: &VectorBase<T>) -> Result<Vector> {
        self.matvec(rhs)
    }
}

/// Scale.
impl<S: Storage> Mul<&MatrixBase<S>> for f64 {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &MatrixBase<S>) -> Result<Matrix> {
        rhs * self
    }
}

/// Elementwise product.
impl<S: Storage, T: Storage> BitXor<&MatrixBase<T>> for &MatrixBase<S> {
    type Output = Result<Matrix>;

    fn bitxor(self, rhs: &MatrixBase<T>) -> Result<Matrix> {
        self.multiply(rhs)
    }
}
