//! Grid - rectangular 2D sample container
//!
//! The `Grid` structure is the fundamental container in gridseg. It holds
//! one sample per cell in row-major order and is addressed by
//! `(row, col)` coordinates or by flat cell index.
//!
//! # Layout
//!
//! - Samples are stored in a single `Vec<T>`, row by row
//! - Cell `(row, col)` lives at flat index `row * width + col`
//! - Dimensions are fixed at construction; a grid is never resized

use crate::error::{Error, Result};

/// A rectangular grid of samples with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a grid filled with copies of `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32, fill: T) -> Result<Self>
    where
        T: Clone,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![fill; (width as usize) * (height as usize)],
        })
    }

    /// Create a grid from row-major backing storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero, or
    /// [`Error::DataLengthMismatch`] if `cells.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, cells: Vec<T>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(Error::DataLengthMismatch {
                len: cells.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid from a vector of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if there are no rows or the first
    /// row is empty, or [`Error::JaggedRows`] if any row has a different
    /// length than the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::InvalidDimension {
                width: width as u32,
                height: height as u32,
            });
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, samples) in rows.into_iter().enumerate() {
            if samples.len() != width {
                return Err(Error::JaggedRows {
                    row,
                    expected: width,
                    actual: samples.len(),
                });
            }
            cells.extend(samples);
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            cells,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A grid always holds at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat index of cell `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] if the coordinate is outside the
    /// grid.
    #[inline]
    pub fn index_of(&self, row: u32, col: u32) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(Error::CellOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok((row as usize) * (self.width as usize) + col as usize)
    }

    /// Coordinates `(row, col)` of a flat cell index.
    ///
    /// Panics in debug builds if `index` is out of range; callers obtain
    /// indices from [`Grid::index_of`] or by iterating `0..len()`.
    #[inline]
    pub fn coords_of(&self, index: usize) -> (u32, u32) {
        debug_assert!(index < self.cells.len());
        let w = self.width as usize;
        ((index / w) as u32, (index % w) as u32)
    }

    /// Sample at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<&T> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells
            .get((row as usize) * (self.width as usize) + col as usize)
    }

    /// Mutable sample at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: u32, col: u32) -> Option<&mut T> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells
            .get_mut((row as usize) * (self.width as usize) + col as usize)
    }

    /// Overwrite the sample at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] if the coordinate is outside the
    /// grid.
    pub fn set(&mut self, row: u32, col: u32, sample: T) -> Result<()> {
        let index = self.index_of(row, col)?;
        self.cells[index] = sample;
        Ok(())
    }

    /// Sample at a flat cell index.
    #[inline]
    pub fn sample(&self, index: usize) -> &T {
        &self.cells[index]
    }

    /// Iterate over all cells as `(row, col, &sample)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &T)> {
        self.cells.iter().enumerate().map(|(index, sample)| {
            let (row, col) = self.coords_of(index);
            (row, col, sample)
        })
    }

    /// Row-major slice of the backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Build a grid of the same dimensions by mapping every sample.
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(&mut f).collect(),
        }
    }
}
