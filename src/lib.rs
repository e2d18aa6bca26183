//! qr_symbol - deterministic QR-style matrix symbol encoder
//!
//! Turns a short string into a 29x29 grid of dark/light modules using a fixed
//! version 3 layout: finder, separator, timing and alignment patterns,
//! BCH-protected format information, byte mode data and mask pattern 0.
//!
//! The payload is padded with pad bytes rather than Reed-Solomon codewords, so
//! symbols are QR-like but not guaranteed to scan with generic readers.
//!
//! ```
//! use qr_symbol::{ECLevel, generate};
//!
//! let matrix = generate("PATIENT-0042", ECLevel::M).unwrap();
//! assert_eq!(matrix.size(), 29);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults
pub mod config;
/// Symbol encoding pipeline (patterns, format info, data, placement)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Matrix, BitGrid, ECLevel, MaskPattern, Version)
pub mod models;
/// Raster rendering of finished matrices
pub mod render;

pub use encoder::generator::{Symbol, SymbolGenerator};
pub use encoder::strategy::{FixedStrategy, SymbolStrategy};
pub use error::{EncodeError, Result};
pub use models::{BitGrid, ECLevel, MaskPattern, Matrix, Version};

use rayon::prelude::*;

/// Encode `text` into a symbol matrix at the given error correction level
///
/// # Errors
/// Returns [`EncodeError`] when the text is too long, contains a character
/// outside the single-byte range, or overflows the 216-bit capacity.
pub fn generate(text: &str, ec_level: ECLevel) -> Result<Matrix> {
    SymbolGenerator::new().generate(text, ec_level)
}

/// Encode many strings in parallel
///
/// Results come back in input order, one per text; a failure for one input
/// does not affect the others.
pub fn generate_batch<T>(texts: &[T], ec_level: ECLevel) -> Vec<Result<Matrix>>
where
    T: AsRef<str> + Sync,
{
    let generator = SymbolGenerator::new();
    texts
        .par_iter()
        .map(|text| generator.generate(text.as_ref(), ec_level))
        .collect()
}
