use crate::error::DomainError;

/// Reference grid dimensions.
///
/// Invariant: `rows >= 1 && cols >= 1`. Construction validates it and the
/// removal methods stop at 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridSpec {
    rows: u32,
    cols: u32,
}

impl GridSpec {
    pub fn new(rows: u32, cols: u32) -> Result<Self, DomainError> {
        if rows == 0 || cols == 0 {
            return Err(DomainError::ZeroGridDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub fn rows(self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(self) -> u32 {
        self.cols
    }

    pub fn add_row(&mut self) {
        self.rows = self.rows.saturating_add(1);
    }

    pub fn add_col(&mut self) {
        self.cols = self.cols.saturating_add(1);
    }

    /// Removes a row. Returns `false` when already at one row.
    pub fn remove_row(&mut self) -> bool {
        shrink(&mut self.rows)
    }

    /// Removes a column. Returns `false` when already at one column.
    pub fn remove_col(&mut self) -> bool {
        shrink(&mut self.cols)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { rows: 1, cols: 1 }
    }
}

fn shrink(n: &mut u32) -> bool {
    if *n > 1 {
        *n -= 1;
        true
    } else {
        false
    }
}
