//! Offset/length/stride metadata for 1-D and row-major 2-D windows.
//!
//! Layouts are validated once at construction against the length of the
//! buffer they describe, so every index they produce afterwards is in range.

use crate::{Result, StridedError};

/// Normalize a possibly negative index against `len` (`-1` is the last element).
#[inline]
pub fn normalize_index(index: isize, len: usize) -> Result<usize> {
    let normalized = if index < 0 {
        index.checked_add(len as isize)
    } else {
        Some(index)
    };
    match normalized {
        Some(i) if i >= 0 && (i as usize) < len => Ok(i as usize),
        _ => Err(StridedError::OutOfBounds { index, len }),
    }
}

/// Window of `len` elements starting at `offset`, `stride` elements apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VecLayout {
    offset: usize,
    len: usize,
    stride: usize,
}

impl VecLayout {
    /// Layout of an owning, unit-stride container.
    pub fn contiguous(len: usize) -> Self {
        Self {
            offset: 0,
            len,
            stride: 1,
        }
    }

    /// Validate a window against a buffer of `buffer_len` elements.
    pub fn new(buffer_len: usize, offset: usize, len: usize, stride: usize) -> Result<Self> {
        if stride == 0 {
            return Err(StridedError::InvalidStride(0));
        }
        if len == 0 {
            return Err(StridedError::InvalidSize);
        }
        let last = stride
            .checked_mul(len - 1)
            .and_then(|span| span.checked_add(offset))
            .ok_or(StridedError::OffsetOverflow)?;
        if last >= buffer_len {
            return Err(StridedError::OffsetOverflow);
        }
        Ok(Self {
            offset,
            len,
            stride,
        })
    }

    /// Sub-window of this layout; `offset`, `len` and `stride` are relative to it.
    pub fn subview(&self, offset: usize, len: usize, stride: usize) -> Result<Self> {
        if stride == 0 {
            return Err(StridedError::InvalidStride(0));
        }
        if len == 0 {
            return Err(StridedError::InvalidSize);
        }
        let last = stride
            .checked_mul(len - 1)
            .and_then(|span| span.checked_add(offset))
            .ok_or(StridedError::OffsetOverflow)?;
        if last >= self.len {
            return Err(StridedError::OffsetOverflow);
        }
        Ok(Self {
            offset: self.offset + offset * self.stride,
            len,
            stride: stride * self.stride,
        })
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.stride == 1
    }

    /// Buffer position of logical element `i`. `i` must be below `len`.
    #[inline]
    pub fn position(&self, i: usize) -> usize {
        self.offset + i * self.stride
    }

    /// Buffer position of a possibly negative logical index, bounds-checked.
    #[inline]
    pub fn checked_position(&self, index: isize) -> Result<usize> {
        normalize_index(index, self.len).map(|i| self.position(i))
    }

    /// Buffer position of the last element.
    #[inline]
    pub fn last_position(&self) -> usize {
        self.position(self.len.saturating_sub(1))
    }
}

/// Row-major window of `rows x cols` elements; rows are `tda` elements apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatLayout {
    offset: usize,
    rows: usize,
    cols: usize,
    tda: usize,
}

impl MatLayout {
    /// Layout of an owning, densely packed matrix.
    pub fn contiguous(rows: usize, cols: usize) -> Self {
        Self {
            offset: 0,
            rows,
            cols,
            tda: cols,
        }
    }

    /// Validate a window against a buffer of `buffer_len` elements.
    pub fn new(buffer_len: usize, offset: usize, rows: usize, cols: usize, tda: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(StridedError::InvalidSize);
        }
        if tda < cols {
            return Err(StridedError::InvalidStride(tda as isize));
        }
        let last = tda
            .checked_mul(rows - 1)
            .and_then(|span| span.checked_add(offset))
            .and_then(|start| start.checked_add(cols - 1))
            .ok_or(StridedError::OffsetOverflow)?;
        if last >= buffer_len {
            return Err(StridedError::OffsetOverflow);
        }
        Ok(Self {
            offset,
            rows,
            cols,
            tda,
        })
    }

    /// Rectangular sub-window starting at row `x`, column `y`.
    pub fn submatrix(&self, x: usize, y: usize, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(StridedError::InvalidSize);
        }
        let row_end = x.checked_add(rows).ok_or(StridedError::OffsetOverflow)?;
        let col_end = y.checked_add(cols).ok_or(StridedError::OffsetOverflow)?;
        if row_end > self.rows {
            return Err(StridedError::out_of_bounds(row_end - 1, self.rows));
        }
        if col_end > self.cols {
            return Err(StridedError::out_of_bounds(col_end - 1, self.cols));
        }
        Ok(Self {
            offset: self.position(x, y),
            rows,
            cols,
            tda: self.tda,
        })
    }

    /// Part of row `i` as a 1-D layout, starting at column `offset`.
    pub fn row(&self, i: usize, offset: usize, len: usize) -> Result<VecLayout> {
        if i >= self.rows {
            return Err(StridedError::out_of_bounds(i, self.rows));
        }
        let sub = self.submatrix(i, offset, 1, len)?;
        Ok(VecLayout {
            offset: sub.offset,
            len,
            stride: 1,
        })
    }

    /// Part of column `j` as a 1-D layout, starting at row `offset`.
    pub fn column(&self, j: usize, offset: usize, len: usize) -> Result<VecLayout> {
        if j >= self.cols {
            return Err(StridedError::out_of_bounds(j, self.cols));
        }
        let sub = self.submatrix(offset, j, len, 1)?;
        Ok(VecLayout {
            offset: sub.offset,
            len,
            stride: self.tda,
        })
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Distance between the starts of consecutive rows.
    #[inline]
    pub fn tda(&self) -> usize {
        self.tda
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Rows are packed back to back.
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.tda == self.cols || self.rows == 1
    }

    /// Buffer position of element `(i, j)`. Indices must be in range.
    #[inline]
    pub fn position(&self, i: usize, j: usize) -> usize {
        self.offset + i * self.tda + j
    }

    /// Buffer position of a possibly negative `(i, j)`, bounds-checked.
    #[inline]
    pub fn checked_position(&self, i: isize, j: isize) -> Result<usize> {
        let i = normalize_index(i, self.rows)?;
        let j = normalize_index(j, self.cols)?;
        Ok(self.position(i, j))
    }

    /// Buffer position of the last element.
    #[inline]
    pub fn last_position(&self) -> usize {
        self.position(self.rows.saturating_sub(1), self.cols.saturating_sub(1))
    }

    /// Buffer range spanned by row `i`.
    #[inline]
    pub fn row_range(&self, i: usize) -> std::ops::Range<usize> {
        let start = self.position(i, 0);
        start..start + self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_index() {
        assert_eq!(normalize_index(0, 3), Ok(0));
        assert_eq!(normalize_index(-1, 3), Ok(2));
        assert_eq!(normalize_index(-3, 3), Ok(0));
        assert_eq!(
            normalize_index(3, 3),
            Err(StridedError::OutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            normalize_index(-4, 3),
            Err(StridedError::OutOfBounds { index: -4, len: 3 })
        );
    }

    #[test]
    fn test_vec_layout_bounds() {
        assert!(VecLayout::new(6, 0, 3, 2).is_ok());
        assert!(VecLayout::new(6, 1, 3, 2).is_ok());
        assert_eq!(VecLayout::new(6, 2, 3, 2), Err(StridedError::OffsetOverflow));
        assert_eq!(VecLayout::new(6, 0, 0, 1), Err(StridedError::InvalidSize));
        assert_eq!(VecLayout::new(6, 0, 2, 0), Err(StridedError::InvalidStride(0)));
    }

    #[test]
    fn test_vec_layout_position() {
        let layout = VecLayout::new(10, 1, 4, 3).unwrap();
        assert_eq!(layout.position(0), 1);
        assert_eq!(layout.position(3), 10);
        assert_eq!(layout.checked_position(-1), Ok(10));
    }

    #[test]
    fn test_vec_subview_composes() {
        let layout = VecLayout::new(20, 2, 9, 2).unwrap();
        let sub = layout.subview(1, 3, 3).unwrap();
        assert_eq!(sub.offset(), 4);
        assert_eq!(sub.stride(), 6);
        assert_eq!(sub.position(2), 16);
        assert!(layout.subview(1, 4, 3).is_err());
    }

    #[test]
    fn test_mat_layout_submatrix() {
        let layout = MatLayout::contiguous(3, 4);
        let sub = layout.submatrix(1, 1, 2, 2).unwrap();
        assert_eq!(sub.offset(), 5);
        assert_eq!(sub.tda(), 4);
        assert_eq!(sub.position(1, 1), 10);
        assert!(!sub.is_contiguous());
        assert_eq!(
            layout.submatrix(2, 0, 2, 1),
            Err(StridedError::OutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            layout.submatrix(0, 1, 1, 4),
            Err(StridedError::OutOfBounds { index: 4, len: 4 })
        );
        assert_eq!(
            layout.submatrix(usize::MAX, 0, 1, 1),
            Err(StridedError::OffsetOverflow)
        );
    }

    #[test]
    fn test_mat_layout_row_and_column() {
        let layout = MatLayout::contiguous(2, 3);
        let row = layout.row(1, 0, 3).unwrap();
        assert_eq!((row.offset(), row.len(), row.stride()), (3, 3, 1));
        let column = layout.column(2, 0, 2).unwrap();
        assert_eq!((column.offset(), column.len(), column.stride()), (2, 2, 3));
        assert!(layout.column(3, 0, 2).is_err());
    }

    #[test]
    fn test_mat_layout_huge_line_index() {
        let layout = MatLayout::contiguous(2, 3);
        assert_eq!(
            layout.row(usize::MAX, 0, 3),
            Err(StridedError::OutOfBounds { index: isize::MAX, len: 2 })
        );
        assert_eq!(
            layout.column(usize::MAX, 0, 2),
            Err(StridedError::OutOfBounds { index: isize::MAX, len: 3 })
        );
        assert_eq!(
            layout.row(2, 0, 3),
            Err(StridedError::OutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_mat_layout_new_checks_tda() {
        assert!(MatLayout::new(12, 0, 3, 4, 4).is_ok());
        assert_eq!(
            MatLayout::new(12, 0, 3, 4, 3),
            Err(StridedError::InvalidStride(3))
        );
        assert_eq!(MatLayout::new(11, 0, 3, 4, 4), Err(StridedError::OffsetOverflow));
    }
}
