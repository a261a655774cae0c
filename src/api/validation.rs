use crate::error::AutoVegaResult;
use crate::interaction::{ensure_channel_list, ensure_toolbar_options};

use super::WidgetConfig;

/// Checks a config before any dataset is looked at, using the same rules the
/// control panel and toolbar enforce on construction.
pub(super) fn validate_widget_config(config: &WidgetConfig) -> AutoVegaResult<()> {
    ensure_channel_list(&config.channels)?;
    ensure_toolbar_options(&config.chart_types, config.initial_chart_type)
}
