//! Owned storage and the storage access traits.

use tracing::trace;

use crate::{Result, StridedError};

/// Read access to a block of `f64` backing a container.
pub trait Storage {
    fn as_slice(&self) -> &[f64];
}

/// Write access to a block of `f64` backing a container.
pub trait StorageMut: Storage {
    fn as_mut_slice(&mut self) -> &mut [f64];
}

/// Exclusively owned, fixed-length block of `f64`.
///
/// The length never changes after allocation. The memory is released when
/// the buffer is dropped, so a container that owns a `Buffer` frees it
/// deterministically at the end of its own lifetime.
#[derive(Debug, PartialEq)]
pub struct Buffer {
    data: Box<[f64]>,
}

impl Buffer {
    /// Allocate `len` elements whose contents the caller must not rely on.
    ///
    /// The current implementation zero-fills, but only [`Buffer::calloc`]
    /// guarantees it.
    pub fn alloc(len: usize) -> Result<Self> {
        Self::calloc(len)
    }

    /// Allocate `len` zero-initialized elements.
    pub fn calloc(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(StridedError::InvalidSize);
        }
        trace!(len, "allocating buffer");
        Ok(Self {
            data: vec![0.0; len].into_boxed_slice(),
        })
    }

    /// Take ownership of existing values.
    pub fn from_vec(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(StridedError::EmptyInput);
        }
        trace!(len = values.len(), "adopting buffer");
        Ok(Self {
            data: values.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: buffers hold at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Clone for Buffer {
    fn clone(&self) -> Self {
        trace!(len = self.data.len(), "copying buffer");
        Self {
            data: self.data.clone(),
        }
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        trace!(len = self.data.len(), "releasing buffer");
    }
}

impl Storage for Buffer {
    #[inline]
    fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl StorageMut for Buffer {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Storage for &[f64] {
    #[inline]
    fn as_slice(&self) -> &[f64] {
        self
    }
}

impl Storage for &mut [f64] {
    #[inline]
    fn as_slice(&self) -> &[f64] {
        self
    }
}

impl StorageMut for &mut [f64] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [f64] {
        self
    }
}
