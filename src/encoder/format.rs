/// Format information encoding (EC level + mask pattern, BCH protected)
use crate::encoder::bch::BchEncoder;
use crate::models::{ECLevel, MaskPattern, Matrix};

/// Format info is 15 bits (5 data + 10 ECC), stored twice around the finders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Mask applied to data modules
    pub mask_pattern: MaskPattern,
}

/// Length of the format codeword
pub const FORMAT_BITS: usize = 15;

impl FormatInfo {
    /// Format info for a level/mask pair
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// The 5-bit data field: EC level code in bits 4-3, mask in bits 2-0
    pub fn data_bits(&self) -> u8 {
        (self.ec_level.format_bits() << 3) | self.mask_pattern.bits()
    }

    /// The full 15-bit codeword
    pub fn codeword(&self) -> u16 {
        BchEncoder::encode_format(self.data_bits())
    }

    /// Write both copies of the codeword and reserve every cell they occupy
    pub fn write(&self, matrix: &mut Matrix) {
        let codeword = self.codeword();
        let size = matrix.size();
        for cells in [primary_cells(), secondary_cells(size)] {
            for (i, &(row, col)) in cells.iter().enumerate() {
                let bit = (codeword >> (FORMAT_BITS - 1 - i)) & 1 == 1;
                matrix.set_function(row, col, bit);
            }
        }
    }

    /// Read back both stored copies as (primary, secondary)
    pub fn read(matrix: &Matrix) -> (u16, u16) {
        let read_copy = |cells: &[(usize, usize); FORMAT_BITS]| {
            cells
                .iter()
                .fold(0u16, |acc, &(row, col)| (acc << 1) | matrix.get(row, col) as u16)
        };
        (
            read_copy(&primary_cells()),
            read_copy(&secondary_cells(matrix.size())),
        )
    }

    /// Decode a codeword, rejecting words whose BCH remainder does not check
    pub fn decode(codeword: u16) -> Option<Self> {
        if codeword >> FORMAT_BITS != 0 || !BchEncoder::check_format(codeword) {
            return None;
        }
        let data = (codeword >> 10) as u8;
        Some(Self {
            ec_level: ECLevel::from_format_bits(data >> 3),
            mask_pattern: MaskPattern::from_bits(data & 0x07),
        })
    }
}

/// Copy next to the top-left finder, MSB first: row 8 left to right
/// (skipping the timing column), then column 8 upward (skipping the timing row).
fn primary_cells() -> [(usize, usize); FORMAT_BITS] {
    [
        (8, 0),
        (8, 1),
        (8, 2),
        (8, 3),
        (8, 4),
        (8, 5),
        (8, 7),
        (8, 8),
        (7, 8),
        (5, 8),
        (4, 8),
        (3, 8),
        (2, 8),
        (1, 8),
        (0, 8),
    ]
}

/// Mirrored copy, MSB first: column 8 upward from the bottom edge beside the
/// bottom-left finder, then row 8 rightward beside the top-right finder.
fn secondary_cells(size: usize) -> [(usize, usize); FORMAT_BITS] {
    let mut cells = [(0, 0); FORMAT_BITS];
    for (i, cell) in cells.iter_mut().enumerate() {
        *cell = if i < 7 {
            (size - 1 - i, 8)
        } else {
            (8, size - 15 + i)
        };
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codewords_per_level() {
        let codeword = |level| FormatInfo::new(level, MaskPattern::Pattern0).codeword();
        assert_eq!(codeword(ECLevel::L), 0b010001111010110);
        assert_eq!(codeword(ECLevel::M), 0);
        assert_eq!(codeword(ECLevel::Q), 0b110000101001101);
        assert_eq!(codeword(ECLevel::H), 0b100001010011011);
    }

    #[test]
    fn test_write_reserves_thirty_cells() {
        let mut matrix = Matrix::new(29);
        FormatInfo::new(ECLevel::L, MaskPattern::Pattern0).write(&mut matrix);
        assert_eq!(matrix.reserved_count(), 30);
        assert!(!matrix.is_reserved(8, 6));
        assert!(!matrix.is_reserved(6, 8));
        assert!(matrix.is_reserved(28, 8));
        assert!(matrix.is_reserved(22, 8));
        assert!(!matrix.is_reserved(21, 8));
        assert!(matrix.is_reserved(8, 21));
        assert!(matrix.is_reserved(8, 28));
    }

    #[test]
    fn test_copies_match() {
        for level in ECLevel::ALL {
            let info = FormatInfo::new(level, MaskPattern::Pattern0);
            let mut matrix = Matrix::new(29);
            info.write(&mut matrix);
            let (primary, secondary) = FormatInfo::read(&matrix);
            assert_eq!(primary, info.codeword());
            assert_eq!(secondary, info.codeword());
            assert_eq!(FormatInfo::decode(primary), Some(info));
        }
    }

    #[test]
    fn test_bit_placement_order() {
        let mut matrix = Matrix::new(29);
        FormatInfo::new(ECLevel::L, MaskPattern::Pattern0).write(&mut matrix);
        // 0b010001111010110: MSB at (8, 0), LSB at (0, 8)
        assert!(!matrix.get(8, 0));
        assert!(matrix.get(8, 1));
        assert!(!matrix.get(0, 8));
        assert!(matrix.get(1, 8));
        // Second copy: MSB at the bottom of column 8, LSB at the right of row 8
        assert!(!matrix.get(28, 8));
        assert!(matrix.get(27, 8));
        assert!(!matrix.get(8, 28));
    }

    #[test]
    fn test_decode_rejects_corruption() {
        let codeword = FormatInfo::new(ECLevel::Q, MaskPattern::Pattern0).codeword();
        assert!(FormatInfo::decode(codeword ^ 0b100).is_none());
        assert!(FormatInfo::decode(0x8000).is_none());
    }
}
