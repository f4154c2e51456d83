use std::fmt;
use std::str::FromStr;

use maze_core::Point;

use crate::distance::{euclidean, manhattan, squared_euclidean};

/// Estimate of the remaining distance to the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Heuristic {
    /// Straight-line distance rounded down. Admissible: paths are shortest.
    #[default]
    Euclidean,
    /// Squared straight-line distance. Cheaper but inadmissible: a path is
    /// found whenever one exists, not necessarily a shortest one.
    SquaredEuclidean,
    /// Manhattan distance. Admissible and exact on an open grid.
    Manhattan,
}

impl Heuristic {
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> u64 {
        match self {
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::SquaredEuclidean => squared_euclidean(from, to),
            Heuristic::Manhattan => manhattan(from, to),
        }
    }

    /// Whether searches using this heuristic return shortest paths.
    #[inline]
    pub const fn is_admissible(self) -> bool {
        !matches!(self, Heuristic::SquaredEuclidean)
    }
}

/// Which priority structure holds the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FrontierKind {
    /// [`NodeList`](crate::NodeList) with a linear scan per selection.
    #[default]
    Linear,
    /// [`HeapFrontier`](crate::HeapFrontier).
    Heap,
}

/// Parameters for [`solve_with`](crate::solve_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveOptions {
    pub heuristic: Heuristic,
    pub frontier: FrontierKind,
}

impl SolveOptions {
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub const fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }
}

/// Error returned when parsing an option name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionError(String);

impl fmt::Display for ParseOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option value \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseOptionError {}

impl FromStr for Heuristic {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(Heuristic::Euclidean),
            "squared-euclidean" | "squared" => Ok(Heuristic::SquaredEuclidean),
            "manhattan" => Ok(Heuristic::Manhattan),
            _ => Err(ParseOptionError(s.to_string())),
        }
    }
}

impl FromStr for FrontierKind {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(FrontierKind::Linear),
            "heap" => Ok(FrontierKind::Heap),
            _ => Err(ParseOptionError(s.to_string())),
        }
    }
}
