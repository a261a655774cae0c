use std::fmt;

use serde::{Deserialize, Serialize};

/// Option shown in the widget toolbar. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    Table,
    Scatter,
    Line,
    Bar,
}

impl ChartType {
    pub const ALL: [Self; 4] = [Self::Table, Self::Scatter, Self::Line, Self::Bar];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Scatter => "Scatter",
            Self::Line => "Line",
            Self::Bar => "Bar",
        }
    }

    /// Mark used to draw this chart type. `Table` has no mark.
    #[must_use]
    pub const fn mark(self) -> Option<MarkKind> {
        match self {
            Self::Table => None,
            Self::Scatter => Some(MarkKind::Point),
            Self::Line => Some(MarkKind::Line),
            Self::Bar => Some(MarkKind::Bar),
        }
    }

    #[must_use]
    pub const fn is_table(self) -> bool {
        matches!(self, Self::Table)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometric primitive used to draw encoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Point,
    Line,
    Bar,
}

impl MarkKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Bar => "bar",
        }
    }
}

impl fmt::Display for MarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
