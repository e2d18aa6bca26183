/// Function pattern placement (finders, separators, timing, alignment)
use crate::models::{Matrix, Version};

/// Side length of a finder pattern
pub const FINDER_SIZE: usize = 7;
const ALIGNMENT_RADIUS: usize = 2;

/// Stamps the structural patterns onto a blank matrix
pub struct StructuralPatternPlacer;

impl StructuralPatternPlacer {
    /// Place every structural pattern for `version`, in placement order
    pub fn place(matrix: &mut Matrix, version: Version) {
        debug_assert_eq!(matrix.size(), version.size());
        let size = matrix.size();

        Self::place_finder(matrix, 0, 0);
        Self::place_finder(matrix, size - FINDER_SIZE, 0);
        Self::place_finder(matrix, 0, size - FINDER_SIZE);
        Self::place_timing(matrix);

        for (row, col) in version.alignment_centers() {
            Self::place_alignment(matrix, row, col);
        }
    }

    /// 7x7 finder at (top, left) plus its one-module light separator,
    /// clipped to the symbol edge
    fn place_finder(matrix: &mut Matrix, top: usize, left: usize) {
        let size = matrix.size();
        let row_range = top.saturating_sub(1)..(top + FINDER_SIZE + 1).min(size);
        for row in row_range {
            let col_range = left.saturating_sub(1)..(left + FINDER_SIZE + 1).min(size);
            for col in col_range {
                let inside = (top..top + FINDER_SIZE).contains(&row)
                    && (left..left + FINDER_SIZE).contains(&col);
                let dark = inside && {
                    let ring = (row - top)
                        .min(col - left)
                        .min(top + FINDER_SIZE - 1 - row)
                        .min(left + FINDER_SIZE - 1 - col);
                    ring != 1
                };
                matrix.set_function(row, col, dark);
            }
        }
    }

    /// Alternating row 6 / column 6 lines between the finder separators
    fn place_timing(matrix: &mut Matrix) {
        let size = matrix.size();
        for i in (FINDER_SIZE + 1)..=(size - FINDER_SIZE - 2) {
            let dark = i % 2 == 0;
            matrix.set_function(6, i, dark);
            matrix.set_function(i, 6, dark);
        }
    }

    /// 5x5 concentric alignment pattern centered at (row, col)
    fn place_alignment(matrix: &mut Matrix, row: usize, col: usize) {
        for r in (row - ALIGNMENT_RADIUS)..=(row + ALIGNMENT_RADIUS) {
            for c in (col - ALIGNMENT_RADIUS)..=(col + ALIGNMENT_RADIUS) {
                let ring = r.abs_diff(row).max(c.abs_diff(col));
                matrix.set_function(r, c, ring != 1);
            }
        }
    }
}
