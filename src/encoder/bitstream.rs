/// Append-only sequence of bits, MSB-first within each appended field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<bool>,
}

impl BitStream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stream with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// Append a single bit
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append the low `width` bits of `value`, most significant first
    pub fn push_bits(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32, "field width {width} exceeds 32 bits");
        debug_assert!(
            width == 32 || value >> width == 0,
            "value {value:#x} does not fit in {width} bits"
        );
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether no bits have been appended
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterate bits front to back
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Bits as a slice
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Pack into bytes, MSB first; a trailing partial byte is zero-filled
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}
