use thiserror::Error;

/// Reasons a string cannot be turned into a symbol.
///
/// All variants are caller errors; retrying with the same input fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Unpadded payload is longer than the symbol capacity
    #[error("payload needs {bits} bits but the symbol holds {capacity}")]
    EncodingOverflow {
        /// Byte-aligned payload length
        bits: usize,
        /// Capacity in bits
        capacity: usize,
    },

    /// A character's code value does not fit in one byte
    #[error("character {character:?} (U+{code:04X}) at position {position} does not fit in one byte")]
    UnsupportedCharacter {
        /// The offending character
        character: char,
        /// Its code value
        code: u32,
        /// Character index within the text
        position: usize,
    },

    /// Character count does not fit the 8-bit count indicator
    #[error("text length {length} exceeds the 8-bit character count limit of {max}")]
    InvalidLength {
        /// Characters in the text
        length: usize,
        /// Largest representable count
        max: usize,
    },
}

/// Result alias for encoding operations
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Text that does not name an error correction level
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown error correction level {0:?} (expected L, M, Q or H)")]
pub struct ParseLevelError(pub String);

/// Failures while writing a rendered symbol
#[derive(Error, Debug)]
pub enum RenderError {
    /// Image encoding failed
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
