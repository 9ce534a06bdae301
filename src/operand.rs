//! Right-hand operands of elementwise arithmetic.
//!
//! Every in-place arithmetic method takes `impl Into<Operand>` and dispatches
//! once over the variant: a scalar is broadcast, a vector or matrix must match
//! the receiver's size or shape.

use strided_kernel as kernel;
use strided_view::{Storage, StridedMatView, StridedMatViewMut, StridedVecView, StridedVecViewMut};

use crate::matrix::{MatrixBase, MatrixView};
use crate::vector::{VectorBase, VectorView};
use crate::Result;

/// Scalar, vector or matrix operand, borrowed for the duration of one call.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(f64),
    Vector(VectorView<'a>),
    Matrix(MatrixView<'a>),
}

impl From<f64> for Operand<'_> {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl<'a, S: Storage> From<&'a VectorBase<S>> for Operand<'a> {
    fn from(v: &'a VectorBase<S>) -> Self {
        Operand::Vector(v.as_view())
    }
}

impl<'a, S: Storage> From<&'a MatrixBase<S>> for Operand<'a> {
    fn from(m: &'a MatrixBase<S>) -> Self {
        Operand::Matrix(m.as_view())
    }
}

impl<'a> From<VectorView<'a>> for Operand<'a> {
    fn from(v: VectorView<'a>) -> Self {
        Operand::Vector(v)
    }
}

impl<'a> From<MatrixView<'a>> for Operand<'a> {
    fn from(m: MatrixView<'a>) -> Self {
        Operand::Matrix(m)
    }
}

/// The four elementwise operators shared by vectors and matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    #[inline]
    pub(crate) fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
        }
    }

    /// Broadcast a scalar over a vector. Division scales by the reciprocal.
    pub(crate) fn scalar_into(self, dest: &mut StridedVecViewMut<'_>, x: f64) {
        match self {
            BinaryOp::Add => kernel::add_constant(dest, x),
            BinaryOp::Sub => kernel::add_constant(dest, -x),
            BinaryOp::Mul => kernel::scal(dest, x),
            BinaryOp::Div => kernel::scal(dest, 1.0 / x),
        }
    }

    pub(crate) fn elementwise_into(
        self,
        dest: &mut StridedVecViewMut<'_>,
        src: &StridedVecView<'_>,
    ) -> Result<()> {
        match self {
            BinaryOp::Add => kernel::add(dest, src),
            BinaryOp::Sub => kernel::sub(dest, src),
            BinaryOp::Mul => kernel::mul(dest, src),
            BinaryOp::Div => kernel::div(dest, src),
        }
    }

    /// Broadcast a scalar over a matrix. Division scales by the reciprocal.
    pub(crate) fn scalar_into_matrix(self, dest: &mut StridedMatViewMut<'_>, x: f64) {
        match self {
            BinaryOp::Div => {
                let inv = 1.0 / x;
                kernel::mat_map_in_place(dest, |d| d * inv);
            }
            op => kernel::mat_map_in_place(dest, |d| op.apply(d, x)),
        }
    }

    pub(crate) fn elementwise_into_matrix(
        self,
        dest: &mut StridedMatViewMut<'_>,
        src: &StridedMatView<'_>,
    ) -> Result<()> {
        kernel::mat_zip_map_in_place(dest, src, |d, s| self.apply(d, s))
    }
}
