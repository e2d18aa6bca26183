/// Symbol generator - wires the encoding pipeline together
use tracing::{debug, trace};

use crate::encoder::data::DataEncoder;
use crate::encoder::format::FormatInfo;
use crate::encoder::patterns::StructuralPatternPlacer;
use crate::encoder::placement::DataPlacer;
use crate::encoder::strategy::{FixedStrategy, SymbolStrategy};
use crate::error::Result;
use crate::models::{ECLevel, MaskPattern, Matrix, Version};

/// Finished symbol with the parameters it was built with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Module grid and reserved mask
    pub matrix: Matrix,
    /// Version the symbol was laid out for
    pub version: Version,
    /// Level recorded in the format information
    pub ec_level: ECLevel,
    /// Mask applied to the data modules
    pub mask_pattern: MaskPattern,
    /// Unpadded, byte-aligned payload length
    pub payload_bits: usize,
    /// Bits written into the matrix (always the full capacity)
    pub placed_bits: usize,
}

/// Builds symbols; stateless apart from its strategy, so one instance can be
/// shared across threads
#[derive(Debug, Clone, Default)]
pub struct SymbolGenerator<S: SymbolStrategy = FixedStrategy> {
    strategy: S,
}

impl SymbolGenerator<FixedStrategy> {
    /// Generator using the fixed version 3 / mask 0 layout
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SymbolStrategy> SymbolGenerator<S> {
    /// Generator using a custom version/mask strategy
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// The strategy in use
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Encode `text` into a finished matrix
    pub fn generate(&self, text: &str, ec_level: ECLevel) -> Result<Matrix> {
        self.encode(text, ec_level).map(|symbol| symbol.matrix)
    }

    /// Encode `text`, keeping the symbol parameters alongside the matrix.
    ///
    /// Input is validated before the matrix is allocated, so a failure never
    /// leaves a partial symbol behind.
    #[tracing::instrument(level = "trace", skip(self, text), fields(chars = text.chars().count()))]
    pub fn encode(&self, text: &str, ec_level: ECLevel) -> Result<Symbol> {
        let version = self.strategy.version();
        let mask_pattern = self.strategy.mask();

        let encoded = DataEncoder::new(self.strategy.capacity_bytes())
            .encode(text)
            .inspect_err(|err| debug!(%err, "rejected input"))?;
        trace!(
            payload_bits = encoded.payload_bits,
            total_bits = encoded.bits.len(),
            "data encoded"
        );

        let mut matrix = Matrix::new(version.size());
        StructuralPatternPlacer::place(&mut matrix, version);
        trace!(reserved = matrix.reserved_count(), "structural patterns placed");

        FormatInfo::new(ec_level, mask_pattern).write(&mut matrix);
        trace!(reserved = matrix.reserved_count(), "format information written");

        let placed_bits = DataPlacer::place(&mut matrix, &encoded.bits, mask_pattern);
        debug!(
            version = version.number(),
            %ec_level,
            mask = mask_pattern.bits(),
            payload_bits = encoded.payload_bits,
            placed_bits,
            data_modules = matrix.data_module_count(),
            "symbol generated"
        );

        Ok(Symbol {
            matrix,
            version,
            ec_level,
            mask_pattern,
            payload_bits: encoded.payload_bits,
            placed_bits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeError;

    #[test]
    fn test_generate_dimensions() {
        let generator = SymbolGenerator::new();
        let symbol = generator.encode("A", ECLevel::H).unwrap();
        assert_eq!(symbol.matrix.size(), 29);
        assert_eq!(symbol.version.number(), 3);
        assert_eq!(symbol.payload_bits, 24);
        assert_eq!(symbol.placed_bits, 216);
        assert_eq!(symbol.matrix.reserved_count(), 273);
        assert_eq!(symbol.matrix.data_module_count(), 568);
    }

    #[test]
    fn test_placed_bits_unmask_to_stream() {
        let generator = SymbolGenerator::new();
        let matrix = generator.generate("Hi", ECLevel::M).unwrap();
        let expected = DataEncoder::new(27).encode("Hi").unwrap().bits;

        let cells = DataPlacer::data_cells(&matrix);
        let read: Vec<bool> = cells
            .iter()
            .take(expected.len())
            .map(|&(r, c)| MaskPattern::Pattern0.apply(r, c, matrix.get(r, c)))
            .collect();
        assert_eq!(read.as_slice(), expected.as_slice());

        // Modules beyond the stream stay light
        assert!(cells[expected.len()..].iter().all(|&(r, c)| !matrix.get(r, c)));
    }

    #[test]
    fn test_format_matches_level() {
        let generator = SymbolGenerator::new();
        for level in ECLevel::ALL {
            let matrix = generator.generate("abc", level).unwrap();
            let (primary, secondary) = FormatInfo::read(&matrix);
            assert_eq!(primary, secondary);
            let info = FormatInfo::decode(primary).unwrap();
            assert_eq!(info.ec_level, level);
            assert_eq!(info.mask_pattern, MaskPattern::Pattern0);
        }
    }

    /// Version 1 symbol with mask 3 and a 19-byte capacity
    struct CompactStrategy;

    impl SymbolStrategy for CompactStrategy {
        fn version(&self) -> Version {
            Version(1)
        }

        fn mask(&self) -> MaskPattern {
            MaskPattern::Pattern3
        }

        fn capacity_bytes(&self) -> usize {
            19
        }
    }

    #[test]
    fn test_custom_strategy() {
        let generator = SymbolGenerator::with_strategy(CompactStrategy);
        assert_eq!(generator.strategy().capacity_bytes(), 19);

        let symbol = generator.encode("seam", ECLevel::Q).unwrap();
        let matrix = &symbol.matrix;
        assert_eq!(matrix.size(), 21);
        assert_eq!(symbol.version.number(), 1);
        assert_eq!(symbol.mask_pattern, MaskPattern::Pattern3);
        assert_eq!(symbol.placed_bits, 152);
        // 3 * 64 finder+separator, 2 * 5 timing, 30 format, no alignment
        assert_eq!(matrix.reserved_count(), 232);

        let (primary, secondary) = FormatInfo::read(matrix);
        assert_eq!(primary, secondary);
        let info = FormatInfo::decode(primary).unwrap();
        assert_eq!(info.mask_pattern, MaskPattern::Pattern3);
        assert_eq!(info.ec_level, ECLevel::Q);

        let expected = DataEncoder::new(19).encode("seam").unwrap().bits;
        let cells = DataPlacer::data_cells(matrix);
        let read: Vec<bool> = cells
            .iter()
            .take(expected.len())
            .map(|&(r, c)| MaskPattern::Pattern3.apply(r, c, matrix.get(r, c)))
            .collect();
        assert_eq!(read.as_slice(), expected.as_slice());

        // Pattern 0 would not recover the same stream
        let with_mask0: Vec<bool> = cells
            .iter()
            .take(expected.len())
            .map(|&(r, c)| MaskPattern::Pattern0.apply(r, c, matrix.get(r, c)))
            .collect();
        assert_ne!(with_mask0.as_slice(), expected.as_slice());

        let max_chars = DataEncoder::new(generator.strategy().capacity_bytes()).max_chars();
        assert_eq!(max_chars, 17);
        assert!(generator.generate(&"q".repeat(max_chars), ECLevel::L).is_ok());
        assert!(matches!(
            generator.generate(&"q".repeat(max_chars + 1), ECLevel::L),
            Err(EncodeError::EncodingOverflow { capacity: 152, .. })
        ));
    }

    #[test]
    fn test_errors_propagate() {
        let generator = SymbolGenerator::new();
        assert!(matches!(
            generator.generate(&"z".repeat(26), ECLevel::L),
            Err(EncodeError::EncodingOverflow { .. })
        ));
        assert!(matches!(
            generator.generate("\u{263A}", ECLevel::L),
            Err(EncodeError::UnsupportedCharacter { position: 0, .. })
        ));
    }
}
