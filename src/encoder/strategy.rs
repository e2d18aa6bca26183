use crate::models::{MaskPattern, Version};

/// Chooses the symbol parameters the rest of the pipeline works with.
///
/// Encoding and placement only read these values, so a strategy that picks
/// version and mask per input can replace [`FixedStrategy`] without touching them.
pub trait SymbolStrategy: Send + Sync {
    /// Symbol version, which fixes the matrix size
    fn version(&self) -> Version;

    /// Mask applied to data modules
    fn mask(&self) -> MaskPattern;

    /// Total data bytes every payload is padded to
    fn capacity_bytes(&self) -> usize;
}

/// Version 3, mask pattern 0, 27-byte capacity for every input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedStrategy;

/// Version used by [`FixedStrategy`]
pub const FIXED_VERSION: u8 = 3;
/// Capacity used by [`FixedStrategy`] (216 bits)
pub const FIXED_CAPACITY_BYTES: usize = 27;

impl SymbolStrategy for FixedStrategy {
    fn version(&self) -> Version {
        Version(FIXED_VERSION)
    }

    fn mask(&self) -> MaskPattern {
        MaskPattern::Pattern0
    }

    fn capacity_bytes(&self) -> usize {
        FIXED_CAPACITY_BYTES
    }
}
