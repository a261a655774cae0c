use serde::{Deserialize, Serialize};

use crate::api::SkipReason;
use crate::core::{ChartType, MarkKind};
use crate::interaction::{ChannelEdit, ChartTypeChange};

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetContext {
    pub chart_type: ChartType,
    pub mark: Option<MarkKind>,
    pub bound_channels: usize,
    pub surface_generation: u64,
    pub redraw_count: u64,
}

/// Event stream exposed to observers, in the order the widget processes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetEvent {
    ChartTypeChanged(ChartTypeChange),
    ChannelEdited(ChannelEdit),
    Redrawn { chart_type: ChartType, generation: u64 },
    RedrawSkipped { reason: SkipReason },
}

/// Hook interface for bounded custom logic.
///
/// Observers see events and a context snapshot but cannot mutate widget state.
pub trait WidgetObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: WidgetEvent, context: WidgetContext);
}
