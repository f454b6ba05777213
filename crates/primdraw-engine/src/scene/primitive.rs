use std::fmt;
use std::str::FromStr;

/// Shape type selected for the vertices being placed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Primitive {
    /// Every vertex is drawn as a point.
    #[default]
    Point,
    /// Vertices pair up into independent segments.
    Line,
    /// All vertices form one closed polygon.
    Polygon,
    /// Center and rim point, aspect corrected.
    Circle,
    /// Center and edge point.
    Ellipse,
}

impl Primitive {
    /// All kinds in selector order.
    pub const ALL: [Primitive; 5] = [
        Primitive::Point,
        Primitive::Line,
        Primitive::Polygon,
        Primitive::Circle,
        Primitive::Ellipse,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Primitive::Point => "Point",
            Primitive::Line => "Line",
            Primitive::Polygon => "Polygon",
            Primitive::Circle => "Circle",
            Primitive::Ellipse => "Ellipse",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selector label that names no primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePrimitiveError(pub String);

impl fmt::Display for ParsePrimitiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown primitive kind `{}`", self.0)
    }
}

impl std::error::Error for ParsePrimitiveError {}

impl FromStr for Primitive {
    type Err = ParsePrimitiveError;

    /// Parses a selector label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Primitive::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParsePrimitiveError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for p in Primitive::ALL {
            assert_eq!(p.label().parse::<Primitive>(), Ok(p));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" ellipse ".parse::<Primitive>(), Ok(Primitive::Ellipse));
        assert_eq!("POLYGON".parse::<Primitive>(), Ok(Primitive::Polygon));
    }

    #[test]
    fn parse_rejects_unknown_label() {
        let err = "Spline".parse::<Primitive>().unwrap_err();
        assert_eq!(err.to_string(), "unknown primitive kind `Spline`");
    }
}
