use std::fmt;

/// Usage errors raised by the plane helpers.
///
/// Numeric corner cases (coincident points, vertical lines) are not errors;
/// they have their own branches in the math.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// Nearest-point search needs at least one candidate.
    EmptyPoints,
    /// Region kind other than `"round"` or `"square"`.
    UnknownRegionShape(String),
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::EmptyPoints => write!(f, "point list is empty (need at least one candidate)"),
            GeomError::UnknownRegionShape(kind) => write!(
                f,
                "invalid region type {kind:?}; expected \"round\" or \"square\""
            ),
        }
    }
}

impl std::error::Error for GeomError {}
