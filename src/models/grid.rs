/// Compact square bit grid addressed by (row, col)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitGrid {
    size: usize,
    data: Vec<u8>,
}

impl BitGrid {
    /// Create an all-zero grid with `size` rows and `size` columns
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Side length in cells
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get bit at (row, col)
    ///
    /// # Panics
    /// Panics if either coordinate is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> bool {
        let (byte_index, bit_index) = self.locate(row, col);
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set bit at (row, col)
    ///
    /// # Panics
    /// Panics if either coordinate is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let (byte_index, bit_index) = self.locate(row, col);
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn locate(&self, row: usize, col: usize) -> (usize, usize) {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside a {0}x{0} grid",
            self.size
        );
        let index = row * self.size + col;
        (index / 8, index % 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_grid() {
        let mut grid = BitGrid::new(8);
        assert_eq!(grid.size(), 8);

        grid.set(3, 4, true);
        assert!(grid.get(3, 4));
        assert!(!grid.get(4, 3));
        assert_eq!(grid.count_ones(), 1);

        grid.set(3, 4, false);
        assert!(!grid.get(3, 4));
        assert_eq!(grid.count_ones(), 0);
    }

    #[test]
    fn test_odd_size_packing() {
        let mut grid = BitGrid::new(29);
        assert_eq!(grid.data.len(), 106);
        grid.set(28, 28, true);
        assert!(grid.get(28, 28));
        assert_eq!(grid.data[105], 1);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_bounds_panics() {
        let grid = BitGrid::new(8);
        grid.get(8, 0);
    }
}
