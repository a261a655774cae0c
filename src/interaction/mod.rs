//! User-editable widget state: channel controls and the chart-type toolbar.

mod channel_control;
mod chart_type_selector;
mod control_panel;

pub use channel_control::{ChannelControl, ChannelControlSnapshot};
pub use chart_type_selector::ChartTypeSelector;
pub use control_panel::{ControlPanel, derive_encoding};

pub(crate) use chart_type_selector::ensure_toolbar_options;
pub(crate) use control_panel::ensure_channel_list;

use serde::{Deserialize, Serialize};

use crate::core::{Channel, ChartType};

/// Which part of a channel control an edit touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelEditKind {
    Selection,
    Enabled,
}

/// Notification emitted by a channel control when a redraw may be needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEdit {
    pub channel: Channel,
    pub kind: ChannelEditKind,
}

/// Toolbar transition reported by `ChartTypeSelector::select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTypeChange {
    pub previous: ChartType,
    pub current: ChartType,
}

/// Mutation sources the reconciliation controller subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEvent {
    ChartTypeChanged(ChartTypeChange),
    ChannelEdited(ChannelEdit),
}
