// crates/quadcode-core/src/encode.rs
//
// The recursive partition encoder: emit one color symbol for a uniform region,
// otherwise emit a split marker and recurse into four quadrants.

use crate::code::{Code, CodeBuilder, Symbol};
use crate::error::Result;
use crate::raster::{Pixel, Raster};
use crate::region::Region;

/// Encode a whole raster into its quadtree run code.
///
/// A zero-area raster (width or height 0) yields an empty code. The raster is
/// only read; encoding the same raster twice produces identical codes.
///
/// The only failure path is allocation failure while growing the output
/// buffer; in that case the partial build is discarded and no code escapes.
pub fn encode(raster: &Raster) -> Result<Code> {
    let mut builder = CodeBuilder::new();

    if raster.width() == 0 || raster.height() == 0 {
        return Ok(builder.finish());
    }

    match encode_region(raster, Region::full(raster), &mut builder) {
        Ok(()) => Ok(builder.finish()),
        Err(e) => {
            builder.discard();
            Err(e)
        }
    }
}

/// Depth-first, pre-order walk of one region.
///
/// Recursion depth is bounded by O(log max(W, H)): each split at least halves
/// the larger dimension of the region.
fn encode_region(raster: &Raster, region: Region, out: &mut CodeBuilder) -> Result<()> {
    // Empty ranges fall out of splitting 1-wide or 1-tall regions.
    if region.is_empty() {
        return Ok(());
    }

    if let Some(color) = uniform_color(raster, region) {
        return out.append(Symbol::from(color));
    }

    out.append(Symbol::Split)?;
    for quadrant in region.split() {
        encode_region(raster, quadrant, out)?;
    }
    Ok(())
}

/// Scan the region and return its color if every cell matches the top-left
/// cell, `None` otherwise. Row-major with early exit; only the result is
/// observable.
fn uniform_color(raster: &Raster, region: Region) -> Option<Pixel> {
    let first = raster.get(region.r_start, region.c_start);
    for r in region.r_start..=region.r_end {
        for c in region.c_start..=region.c_end {
            if raster.get(r, c) != first {
                return None;
            }
        }
    }
    Some(first)
}
