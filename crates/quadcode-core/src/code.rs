// crates/quadcode-core/src/code.rs
//
// Output alphabet and the append-only accumulator the encoder writes into.
// The accumulator exists for the same reason the usual string-builder does:
// repeated whole-string concatenation is O(n^2), geometric doubling makes the
// build O(n) total.

use crate::error::Result;
use crate::raster::Pixel;

const INITIAL_CAPACITY: usize = 64;

/// The three-character output alphabet. `White` and `Black` each stand for one
/// uniform leaf region; `Split` announces that exactly four encoded
/// sub-regions follow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    White,
    Black,
    Split,
}

impl Symbol {
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Symbol::White => 'W',
            Symbol::Black => 'B',
            Symbol::Split => 'X',
        }
    }
}

impl From<Pixel> for Symbol {
    #[inline]
    fn from(p: Pixel) -> Symbol {
        match p {
            Pixel::White => Symbol::White,
            Pixel::Black => Symbol::Black,
        }
    }
}

/// A finished code: the flat symbol sequence for a whole raster, immutable
/// once built. No separators, terminators, or length headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Code(String);

impl Code {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Append-only builder for a `Code`.
///
/// Starts at a small fixed capacity and doubles whenever the next symbol would
/// not fit, so `append` is amortized O(1) and a build of n symbols performs
/// O(log n) reallocations. Growth goes through `try_reserve_exact`, so an
/// allocation failure surfaces as an error instead of corrupting or silently
/// truncating the in-progress code.
#[derive(Debug)]
pub struct CodeBuilder {
    buf: String,
}

impl CodeBuilder {
    pub fn new() -> CodeBuilder {
        CodeBuilder {
            buf: String::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append one symbol. Amortized O(1).
    pub fn append(&mut self, sym: Symbol) -> Result<()> {
        let needed = self.buf.len() + 1;
        if needed > self.buf.capacity() {
            let mut target = self.buf.capacity().max(INITIAL_CAPACITY);
            while target < needed {
                target *= 2;
            }
            self.buf.try_reserve_exact(target - self.buf.len())?;
        }
        self.buf.push(sym.as_char());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current allocated capacity, in symbols.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Finish the build, moving the accumulated storage out as the final
    /// `Code`. O(1): no copy, the buffer itself becomes the code.
    pub fn finish(self) -> Code {
        Code(self.buf)
    }

    /// Abandon the build, releasing the buffer without producing a code.
    /// Safe on a builder that was never appended to.
    pub fn discard(self) {}
}

impl Default for CodeBuilder {
    fn default() -> Self {
        CodeBuilder::new()
    }
}
