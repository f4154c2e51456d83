//! Error type shared by the maze model and the search engine.

use std::collections::TryReserveError;
use std::fmt;

use crate::geom::{Point, Size};

/// Errors raised while building or querying a maze, or while growing search
/// storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A point lies outside the grid.
    OutOfBounds { point: Point, size: Size },
    /// Storage for cells or nodes could not be allocated.
    AllocationFailure(TryReserveError),
    /// The requested storage length does not fit in a `usize`.
    CapacityOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point, size } => {
                write!(f, "point {point} is outside the {size} grid")
            }
            Self::AllocationFailure(e) => write!(f, "allocation failed: {e}"),
            Self::CapacityOverflow => write!(f, "requested capacity overflows usize"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AllocationFailure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self {
        Self::AllocationFailure(e)
    }
}

/// Convenience alias used throughout the maze crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message() {
        let e = Error::OutOfBounds {
            point: Point::new(5, 1),
            size: Size::new(4, 4),
        };
        assert_eq!(e.to_string(), "point (5, 1) is outside the 4x4 grid");
    }

    #[test]
    fn allocation_failure_has_source() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        let e = Error::from(err);
        assert!(std::error::Error::source(&e).is_some());
        assert!(e.to_string().starts_with("allocation failed"));
    }
}
