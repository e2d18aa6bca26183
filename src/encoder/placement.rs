/// Zigzag data placement with masking
use crate::encoder::bitstream::BitStream;
use crate::models::{MaskPattern, Matrix};

const TIMING_COL: usize = 6;

/// Writes a bit stream into the unreserved cells of a matrix
pub struct DataPlacer;

impl DataPlacer {
    /// Place `bits` along the zigzag traversal, masking each bit with `mask`.
    ///
    /// Cells left over once the stream runs out stay light. Returns the number
    /// of bits written.
    pub fn place(matrix: &mut Matrix, bits: &BitStream, mask: MaskPattern) -> usize {
        let mut stream = bits.iter();
        let mut placed = 0;
        for (row, col) in Self::data_cells(matrix) {
            let Some(bit) = stream.next() else {
                break;
            };
            matrix.set(row, col, mask.apply(row, col, bit));
            placed += 1;
        }
        placed
    }

    /// Unreserved cells in placement order.
    ///
    /// Two-column strips from the right edge, right column first; the first
    /// strip runs bottom to top and direction alternates per strip. The
    /// timing column is skipped by shifting the strip one column left.
    pub fn data_cells(matrix: &Matrix) -> Vec<(usize, usize)> {
        let size = matrix.size();
        let mut cells = Vec::with_capacity(matrix.data_module_count());
        let mut upward = true;
        let mut col = size as isize - 1;

        while col > 0 {
            if col as usize == TIMING_COL {
                col -= 1;
                continue;
            }
            let right = col as usize;
            for i in 0..size {
                let row = if upward { size - 1 - i } else { i };
                for c in [right, right - 1] {
                    if !matrix.is_reserved(row, c) {
                        cells.push((row, c));
                    }
                }
            }
            upward = !upward;
            col -= 2;
        }

        cells
    }
}
