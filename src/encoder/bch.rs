/// BCH(15,5) code protecting the format information
pub struct BchEncoder;

/// Generator polynomial: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0b101_0011_0111;

const FORMAT_DATA_BITS: u32 = 5;
const FORMAT_ECC_BITS: u32 = 10;

const _: () = assert!(
    u32::BITS - FORMAT_GENERATOR.leading_zeros() == FORMAT_ECC_BITS + 1,
    "format generator must have degree 10"
);

impl BchEncoder {
    /// Extend a 5-bit value to its 15-bit format codeword
    pub fn encode_format(data: u8) -> u16 {
        let data = u32::from(data) & ((1 << FORMAT_DATA_BITS) - 1);
        let remainder = Self::remainder(data << FORMAT_ECC_BITS, FORMAT_GENERATOR);
        ((data << FORMAT_ECC_BITS) | remainder) as u16
    }

    /// Whether a 15-bit word is a valid codeword (zero syndrome)
    pub fn check_format(codeword: u16) -> bool {
        Self::remainder(u32::from(codeword), FORMAT_GENERATOR) == 0
    }

    /// Polynomial remainder of `value` modulo `generator` over GF(2)
    fn remainder(mut value: u32, generator: u32) -> u32 {
        let degree = bit_length(generator) - 1;
        while bit_length(value) > degree {
            value ^= generator << (bit_length(value) - bit_length(generator));
        }
        value
    }
}

fn bit_length(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codewords() {
        assert_eq!(BchEncoder::encode_format(0b01000), 0b010001111010110);
        assert_eq!(BchEncoder::encode_format(0b00000), 0);
        assert_eq!(BchEncoder::encode_format(0b11000), 0b110000101001101);
        assert_eq!(BchEncoder::encode_format(0b10000), 0b100001010011011);
    }

    #[test]
    fn test_every_codeword_checks() {
        for data in 0..32u8 {
            let codeword = BchEncoder::encode_format(data);
            assert_eq!(codeword >> 10, data as u16);
            assert!(BchEncoder::check_format(codeword));
            assert!(!BchEncoder::check_format(codeword ^ 1));
        }
    }
}
