use std::fmt;

use serde::{Deserialize, Serialize};

/// Reducing operator applied to one underlying column.
///
/// The enumeration is closed: every operation over it matches exhaustively,
/// so an out-of-range tag cannot be constructed in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationType {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregationType {
    pub const ALL: [AggregationType; 5] = [
        AggregationType::Count,
        AggregationType::Sum,
        AggregationType::Avg,
        AggregationType::Min,
        AggregationType::Max,
    ];

    /// Canonical lowercase name ("count", "sum", ...).
    pub fn name(&self) -> &'static str {
        match self {
            AggregationType::Count => "count",
            AggregationType::Sum => "sum",
            AggregationType::Avg => "avg",
            AggregationType::Min => "min",
            AggregationType::Max => "max",
        }
    }
}

/// Renders the uppercase form used by the query-string grammar: `SUM(age)`.
impl fmt::Display for AggregationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregationType::Count => "COUNT",
            AggregationType::Sum => "SUM",
            AggregationType::Avg => "AVG",
            AggregationType::Min => "MIN",
            AggregationType::Max => "MAX",
        };
        write!(f, "{}", name)
    }
}
