use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Channel, ChartType, MarkKind};
use crate::data::Dataset;
use crate::error::{AutoVegaError, AutoVegaResult};
use crate::interaction::ChannelControlSnapshot;
use crate::render::ChartBuilder;

use super::AutoVegaWidget;

/// Serializable deterministic widget state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSnapshot {
    pub columns: Vec<String>,
    pub chart_types: Vec<ChartType>,
    pub chart_type: ChartType,
    pub mark: Option<MarkKind>,
    pub controls: Vec<ChannelControlSnapshot>,
    pub encoding: IndexMap<Channel, String>,
    pub surface_generation: u64,
    pub redraw_count: u64,
}

impl<D: Dataset, C: ChartBuilder> AutoVegaWidget<D, C> {
    #[must_use]
    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            columns: self.catalog().names().map(str::to_owned).collect(),
            chart_types: self.chart_types().to_vec(),
            chart_type: self.chart_type(),
            mark: self.chart_type().mark(),
            controls: self
                .controller
                .panel()
                .controls()
                .map(|control| control.snapshot())
                .collect(),
            encoding: self.encoding().to_name_map(),
            surface_generation: self.surface().generation(),
            redraw_count: self.redraw_count(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> AutoVegaResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| AutoVegaError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
