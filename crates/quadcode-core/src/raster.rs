// crates/quadcode-core/src/raster.rs

use crate::error::{QuadError, Result};

/// One cell of a binary image. Exactly two values exist; anything else a source
/// format can express must be rejected before a `Raster` is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pixel {
    White,
    Black,
}

/// A rectangular grid of `Pixel`s, stored contiguously row-major with stride
/// equal to `width`. Rectangularity is enforced at construction; after that the
/// grid is read-only as far as the encoder is concerned.
///
/// Zero-sized rasters (width or height 0) are valid and encode to an empty code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    cells: Vec<Pixel>,
}

impl Raster {
    /// Build a raster filled with a single color.
    pub fn new(width: usize, height: usize, fill: Pixel) -> Raster {
        Raster {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Build a raster from per-row cell vectors.
    ///
    /// Every row must have the same length; jagged input is a validation error,
    /// not something to silently pad or truncate.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Raster> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());

        let mut cells = Vec::with_capacity(width * height);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(QuadError::Raster(format!(
                    "jagged rows: row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            cells.extend(row);
        }

        Ok(Raster {
            width,
            height,
            cells,
        })
    }

    /// Build a raster from a flat row-major cell buffer.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Pixel>) -> Result<Raster> {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| QuadError::Raster("raster dimensions overflow".into()))?;
        if cells.len() != expected {
            return Err(QuadError::Raster(format!(
                "cell count mismatch: got {}, expected {}x{}={}",
                cells.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Raster {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (row, col). Callers stay inside `0..height` x `0..width`; the
    /// encoder only derives indices from regions of this raster.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Pixel {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }
}
