// crates/quadcode-core/src/region.rs

use crate::raster::Raster;

/// An axis-aligned sub-rectangle of a raster, as inclusive row and column
/// ranges. Regions only exist as recursion parameters; they are never stored.
///
/// A region is empty when a start index exceeds its end index. Empty regions
/// arise from splitting a 1-wide or 1-tall region and contribute nothing to
/// the output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub r_start: usize,
    pub r_end: usize,
    pub c_start: usize,
    pub c_end: usize,
}

impl Region {
    /// The region covering a whole raster. Requires width and height >= 1;
    /// zero-area rasters never enter the recursion.
    pub fn full(raster: &Raster) -> Region {
        Region {
            r_start: 0,
            r_end: raster.height() - 1,
            c_start: 0,
            c_end: raster.width() - 1,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.r_start > self.r_end || self.c_start > self.c_end
    }

    /// Row count. Only meaningful for non-empty regions.
    #[inline]
    pub fn height(&self) -> usize {
        debug_assert!(!self.is_empty());
        self.r_end - self.r_start + 1
    }

    /// Column count. Only meaningful for non-empty regions.
    #[inline]
    pub fn width(&self) -> usize {
        debug_assert!(!self.is_empty());
        self.c_end - self.c_start + 1
    }

    /// Split into four quadrants: top-left, top-right, bottom-left,
    /// bottom-right. The order is part of the code contract.
    ///
    /// The split row/column is `start + (len+1)/2 - 1` with truncating integer
    /// division, so the larger half of an odd-sized region goes to the
    /// top/left quadrant. Splitting a 1-wide or 1-tall region yields empty
    /// right/bottom quadrants; callers drop those via `is_empty`.
    pub fn split(&self) -> [Region; 4] {
        let mid_r = self.r_start + (self.height() + 1) / 2 - 1;
        let mid_c = self.c_start + (self.width() + 1) / 2 - 1;

        [
            Region {
                r_start: self.r_start,
                r_end: mid_r,
                c_start: self.c_start,
                c_end: mid_c,
            },
            Region {
                r_start: self.r_start,
                r_end: mid_r,
                c_start: mid_c + 1,
                c_end: self.c_end,
            },
            Region {
                r_start: mid_r + 1,
                r_end: self.r_end,
                c_start: self.c_start,
                c_end: mid_c,
            },
            Region {
                r_start: mid_r + 1,
                r_end: self.r_end,
                c_start: mid_c + 1,
                c_end: self.c_end,
            },
        ]
    }
}
