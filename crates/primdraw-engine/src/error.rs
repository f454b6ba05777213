use std::fmt;

/// Invalid geometric precondition.
///
/// Both variants are preventable by the caller (a validated `GridSpec`, a
/// non-empty window). They surface here instead of as NaN/Inf coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DomainError {
    /// Viewport with a non-positive or non-finite dimension.
    EmptyViewport { width: f32, height: f32 },
    /// Grid with zero rows or zero columns.
    ZeroGridDimension { rows: u32, cols: u32 },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::EmptyViewport { width, height } => {
                write!(f, "viewport {width}x{height} has no drawable area")
            }
            DomainError::ZeroGridDimension { rows, cols } => {
                write!(f, "grid {rows}x{cols} needs at least one row and one column")
            }
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_dimensions() {
        let e = DomainError::EmptyViewport { width: 0.0, height: 600.0 };
        assert_eq!(e.to_string(), "viewport 0x600 has no drawable area");

        let e = DomainError::ZeroGridDimension { rows: 0, cols: 3 };
        assert_eq!(e.to_string(), "grid 0x3 needs at least one row and one column");
    }
}
