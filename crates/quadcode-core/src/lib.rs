pub mod error;

pub mod code;
pub mod encode;
pub mod raster;
pub mod region;

pub use crate::code::{Code, CodeBuilder, Symbol};
pub use crate::encode::encode;
pub use crate::raster::{Pixel, Raster};
pub use crate::region::Region;
