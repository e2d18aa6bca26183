/// Byte mode data encoding (Mode 0100) with terminator and padding
use crate::encoder::bitstream::BitStream;
use crate::error::{EncodeError, Result};

/// Byte mode indicator
pub const MODE_BYTE: u32 = 0b0100;
/// Width of the mode indicator
pub const MODE_BITS: usize = 4;
/// Width of the character count indicator
pub const COUNT_BITS: usize = 8;
/// Width of the all-zero terminator
pub const TERMINATOR_BITS: usize = 4;
/// Pad bytes appended alternately until the capacity is reached
pub const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Padded bit stream plus diagnostics about the payload it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedData {
    /// Stream padded to exactly the capacity
    pub bits: BitStream,
    /// Length before byte padding (mode + count + payload + terminator, byte aligned)
    pub payload_bits: usize,
    /// Number of characters encoded
    pub char_count: usize,
}

/// Converts text into a fixed-capacity byte-mode bit stream
pub struct DataEncoder {
    capacity_bytes: usize,
}

impl DataEncoder {
    /// Encoder that pads to `capacity_bytes` bytes
    pub fn new(capacity_bytes: usize) -> Self {
        Self { capacity_bytes }
    }

    /// Capacity in bits
    pub fn capacity_bits(&self) -> usize {
        self.capacity_bytes * 8
    }

    /// Encode `text`, one byte per character, padded to exactly the capacity
    pub fn encode(&self, text: &str) -> Result<EncodedData> {
        let capacity = self.capacity_bits();
        let char_count = text.chars().count();
        let max_count = (1usize << COUNT_BITS) - 1;
        if char_count > max_count {
            return Err(EncodeError::InvalidLength {
                length: char_count,
                max: max_count,
            });
        }

        let mut bits = BitStream::with_capacity(capacity.max(Self::unpadded_len(char_count)));
        bits.push_bits(MODE_BYTE, MODE_BITS);
        bits.push_bits(char_count as u32, COUNT_BITS);

        for (position, character) in text.chars().enumerate() {
            let code = u32::from(character);
            if code > u32::from(u8::MAX) {
                return Err(EncodeError::UnsupportedCharacter {
                    character,
                    code,
                    position,
                });
            }
            bits.push_bits(code, 8);
        }

        bits.push_bits(0, TERMINATOR_BITS);
        while bits.len() % 8 != 0 {
            bits.push(false);
        }

        let payload_bits = bits.len();
        if payload_bits > capacity {
            return Err(EncodeError::EncodingOverflow {
                bits: payload_bits,
                capacity,
            });
        }

        for &pad in PAD_BYTES.iter().cycle() {
            if bits.len() >= capacity {
                break;
            }
            bits.push_bits(u32::from(pad), 8);
        }

        Ok(EncodedData {
            bits,
            payload_bits,
            char_count,
        })
    }

    /// Byte-aligned length of the unpadded stream for `char_count` characters
    pub fn unpadded_len(char_count: usize) -> usize {
        (MODE_BITS + COUNT_BITS + 8 * char_count + TERMINATOR_BITS).div_ceil(8) * 8
    }

    /// Longest text (in characters) that fits the capacity
    pub fn max_chars(&self) -> usize {
        let fixed = MODE_BITS + COUNT_BITS + TERMINATOR_BITS;
        ((self.capacity_bits().saturating_sub(fixed)) / 8).min((1 << COUNT_BITS) - 1)
    }
}
