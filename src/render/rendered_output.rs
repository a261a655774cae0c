use smallvec::smallvec;

use crate::core::ChartType;

use super::{ChartSpec, Renderable, SurfaceItems};

/// Result of one redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedOutput {
    Table {
        table: Renderable,
    },
    Chart {
        chart_type: ChartType,
        panel: Renderable,
        chart: Renderable,
        spec: ChartSpec,
    },
}

impl RenderedOutput {
    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        match self {
            Self::Table { .. } => ChartType::Table,
            Self::Chart { chart_type, .. } => *chart_type,
        }
    }

    #[must_use]
    pub fn is_chart(&self) -> bool {
        matches!(self, Self::Chart { .. })
    }

    #[must_use]
    pub fn spec(&self) -> Option<&ChartSpec> {
        match self {
            Self::Table { .. } => None,
            Self::Chart { spec, .. } => Some(spec),
        }
    }

    /// Items to place on the output surface, in display order.
    #[must_use]
    pub fn surface_items(&self) -> SurfaceItems {
        match self {
            Self::Table { table } => smallvec![table.clone()],
            Self::Chart { panel, chart, .. } => smallvec![panel.clone(), chart.clone()],
        }
    }
}
