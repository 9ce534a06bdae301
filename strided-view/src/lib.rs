//! Owned buffers and strided view types for double-precision containers.
//!
//! This crate is the storage layer of the strided-linalg workspace. It knows
//! nothing about arithmetic; it only owns memory and describes windows into it.
//!
//! # Core Types
//!
//! - [`Buffer`]: Exclusively owned, fixed-length block of `f64`
//! - [`Storage`] / [`StorageMut`]: Read and write access to backing memory,
//!   implemented by [`Buffer`], `&[f64]` and `&mut [f64]`
//! - [`VecLayout`] / [`MatLayout`]: Offset/length/stride metadata for 1-D and
//!   row-major 2-D windows
//! - [`StridedVecView`] / [`StridedVecViewMut`] / [`StridedMatView`] /
//!   [`StridedMatViewMut`]: Borrowed windows consumed by `strided-kernel`
//!
//! # Example
//!
//! ```rust
//! use strided_view::{Buffer, StridedVecView, VecLayout};
//!
//! let buffer = Buffer::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! let layout = VecLayout::new(buffer.len(), 1, 2, 2).unwrap();
//! let view = StridedVecView::new(buffer.as_slice(), layout).unwrap();
//! assert_eq!(view.iter().collect::<Vec<_>>(), vec![2.0, 4.0]);
//! ```

mod buffer;
pub mod layout;
pub mod view;

pub use buffer::{Buffer, Storage, StorageMut};
pub use layout::{MatLayout, VecLayout};
pub use view::{StridedMatView, StridedMatViewMut, StridedVecView, StridedVecViewMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while building or operating on strided containers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StridedError {
    /// A container was requested with a zero length or shape.
    #[error("invalid size: containers need at least one element")]
    InvalidSize,

    /// A container was built from an empty source collection.
    #[error("cannot build a container from empty input")]
    EmptyInput,

    /// Index outside the valid range after negative-index normalization.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: isize, len: usize },

    /// Vector lengths differ in a binary operation.
    #[error("size mismatch: {0} vs {1}")]
    SizeMismatch(usize, usize),

    /// Matrix shapes are incompatible for the operation.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),

    /// Matrix is not square when a square matrix was required.
    #[error("non-square matrix: rows={rows}, cols={cols}")]
    NonSquare { rows: usize, cols: usize },

    /// View stride must be strictly positive.
    #[error("invalid stride {0}: stride must be positive")]
    InvalidStride(isize),

    /// The operand cannot be converted to the receiver's container type.
    #[error("operand cannot be coerced into a {0}")]
    Coercion(&'static str),

    /// Views must be taken from the owning container, not from another view.
    #[error("cannot create a view from a view")]
    ViewOfView,

    /// A bound or distribution parameter is outside its domain.
    #[error("invalid bound: {0}")]
    InvalidBound(f64),

    /// Integer overflow or out-of-buffer window while computing offsets.
    #[error("offset overflow while computing view window")]
    OffsetOverflow,

    /// Argument too large for the result to keep any precision.
    #[error("precision loss for argument {0}")]
    PrecisionLoss(f64),
}

impl StridedError {
    /// `OutOfBounds` for an unsigned index. Indices past `isize::MAX` saturate
    /// rather than wrap to a negative position.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        StridedError::OutOfBounds {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }
}

/// Result type for strided container operations.
pub type Result<T> = std::result::Result<T, StridedError>;
