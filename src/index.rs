//! Wildcard indexing for matrices.

use strided_view::Buffer;

use crate::matrix::MatrixBase;
use crate::vector::Vector;

/// One matrix index: a position (negative counts from the end) or every
/// position along that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idx {
    At(isize),
    All,
}

/// Wildcard selecting a whole row or column.
pub const ALL: Idx = Idx::All;

impl From<isize> for Idx {
    fn from(i: isize) -> Self {
        Idx::At(i)
    }
}

/// Indices past `isize::MAX` saturate, so they stay out of bounds instead of
/// wrapping to a negative (from-the-end) position.
impl From<usize> for Idx {
    fn from(i: usize) -> Self {
        Idx::At(isize::try_from(i).unwrap_or(isize::MAX))
    }
}

impl From<i32> for Idx {
    fn from(i: i32) -> Self {
        Idx::At(i as isize)
    }
}

/// Result of [`MatrixBase::select`].
#[derive(Debug)]
pub enum Selection<'a, S = Buffer> {
    /// `(i, j)`: a single element.
    Element(f64),
    /// `(i, ALL)`: a copy of row `i`.
    Row(Vector),
    /// `(ALL, j)`: a copy of column `j`.
    Column(Vector),
    /// `(ALL, ALL)`: the matrix itself.
    All(&'a MatrixBase<S>),
}

impl<'a, S> Selection<'a, S> {
    pub fn element(self) -> Option<f64> {
        match self {
            Selection::Element(x) => Some(x),
            _ => None,
        }
    }

    /// The copied row or column, if one was selected.
    pub fn vector(self) -> Option<Vector> {
        match self {
            Selection::Row(v) | Selection::Column(v) => Some(v),
            _ => None,
        }
    }

    pub fn matrix(self) -> Option<&'a MatrixBase<S>> {
        match self {
            Selection::All(m) => Some(m),
            _ => None,
        }
    }
}
