//! Fixed-size `f64` vectors and row-major matrices with borrow-checked views.
//!
//! Containers own their storage exclusively. Views borrow it, so a view can
//! never outlive its owner and two writable views of one owner cannot exist
//! at the same time. Arithmetic runs on the kernels in `strided-kernel`.
//!
//! # Core Types
//!
//! - [`Vector`] / [`VectorView`] / [`VectorViewMut`]: 1-D containers and
//!   strided windows, all instances of [`VectorBase`]
//! - [`Matrix`] / [`MatrixView`] / [`MatrixViewMut`]: row-major 2-D containers
//!   and rectangular windows, all instances of [`MatrixBase`]
//! - [`Operand`]: scalar, vector or matrix right-hand side of elementwise ops
//! - [`Idx`] / [`ALL`] / [`Selection`]: wildcard matrix indexing
//!
//! # Modules
//!
//! - [`rng`]: uniform and Gaussian samplers, random containers
//! - [`fit`]: least-squares line fitting
//! - [`special`]: angle reduction
//!
//! Statistics (`mean`, `variance`, `skew`, ...) are methods on every vector
//! type.
//!
//! # Example
//!
//! ```rust
//! use strided_linalg::{Matrix, Vector, ALL};
//!
//! let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! let v = Vector::from_slice(&[1.0, 1.0]).unwrap();
//! assert_eq!((&m * &v).unwrap().to_vec(), vec![3.0, 7.0]);
//!
//! let column = m.select(ALL, 1).unwrap().vector().unwrap();
//! assert_eq!(column.to_vec(), vec![2.0, 4.0]);
//!
//! let mut owner = Vector::from_fn(6, |i| i as f64).unwrap();
//! {
//!     let mut evens = owner.view_mut(0, None, 2).unwrap();
//!     evens.fill(-1.0);
//! }
//! assert_eq!(owner.to_string(), "[-1.0, 1.0, -1.0, 3.0, -1.0, 5.0]");
//! ```

pub mod fit;
mod index;
mod linalg;
mod matrix;
mod operand;
mod ops;
pub mod rng;
pub mod special;
mod stats;
mod vector;

pub use strided_kernel::{KernelConfig, LinearFit};
pub use strided_view::{Buffer, Result, StridedError};

pub use index::{Idx, Selection, ALL};
pub use matrix::{Matrix, MatrixBase, MatrixView, MatrixViewMut};
pub use operand::Operand;
pub use vector::{Vector, VectorBase, VectorView, VectorViewMut};
