use super::BitGrid;

/// Square symbol matrix: module values plus a parallel reserved mask.
///
/// A reserved cell belongs to a structural or format pattern. Data placement
/// never writes to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    modules: BitGrid,
    reserved: BitGrid,
}

impl Matrix {
    /// Create an all-light, all-unreserved matrix
    pub fn new(size: usize) -> Self {
        Self {
            modules: BitGrid::new(size),
            reserved: BitGrid::new(size),
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// Module value at (row, col); true = dark
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.modules.get(row, col)
    }

    /// Set module value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.modules.set(row, col, value);
    }

    /// Mark (row, col) as owned by a function pattern
    pub fn reserve(&mut self, row: usize, col: usize) {
        self.reserved.set(row, col, true);
    }

    /// Set a module and reserve it in one step
    pub fn set_function(&mut self, row: usize, col: usize, value: bool) {
        self.set(row, col, value);
        self.reserve(row, col);
    }

    /// Whether (row, col) belongs to a function pattern
    pub fn is_reserved(&self, row: usize, col: usize) -> bool {
        self.reserved.get(row, col)
    }

    /// Number of reserved cells
    pub fn reserved_count(&self) -> usize {
        self.reserved.count_ones()
    }

    /// Number of cells available to data placement
    pub fn data_module_count(&self) -> usize {
        self.size() * self.size() - self.reserved_count()
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.modules.count_ones()
    }

    /// Iterate rows as vectors of module values
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        let size = self.size();
        (0..size).map(move |row| (0..size).map(|col| self.get(row, col)).collect())
    }

    /// Text dump, `#` for dark and `.` for light, one line per row
    pub fn to_ascii(&self) -> String {
        let size = self.size();
        let mut out = String::with_capacity(size * (size + 1));
        for row in self.rows() {
            out.extend(row.iter().map(|&dark| if dark { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}
