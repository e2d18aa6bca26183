//! Symbol encoding modules
//!
//! The pipeline that turns a string into a finished matrix:
//! - Structural patterns (finders, separators, timing, alignment)
//! - BCH-protected format information
//! - Byte mode data encoding and padding
//! - Zigzag data placement and masking

/// BCH(15,5) code for format info
pub mod bch;
/// Append-only bit sequence produced by data encoding
pub mod bitstream;
/// Byte mode encoding with terminator and pad bytes
pub mod data;
/// Format information encoding (EC level, mask pattern)
pub mod format;
/// Facade that orchestrates the pipeline
pub mod generator;
/// Finder, separator, timing and alignment patterns
pub mod patterns;
/// Zigzag data placement with masking
pub mod placement;
/// Version/mask selection seam
pub mod strategy;
