/// Packed square bit storage
pub mod grid;
/// Symbol matrix with reserved-cell mask
pub mod matrix;
/// Version, error correction level and mask pattern
pub mod symbol;

pub use grid::BitGrid;
pub use matrix::Matrix;
pub use symbol::{ECLevel, MaskPattern, Version};
