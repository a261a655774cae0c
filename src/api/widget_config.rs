use serde::{Deserialize, Serialize};

use crate::core::{Channel, ChartType};
use crate::error::{AutoVegaError, AutoVegaResult};

use super::validation::validate_widget_config;

/// Widget bootstrap configuration.
///
/// Serializable so hosts can ship widget setup as a document instead of
/// inventing their own format. Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Channels that get a control, in panel order.
    #[serde(default = "default_channels")]
    pub channels: Vec<Channel>,
    /// Toolbar options, in display order.
    #[serde(default = "default_chart_types")]
    pub chart_types: Vec<ChartType>,
    #[serde(default)]
    pub initial_chart_type: ChartType,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            channels: default_channels(),
            chart_types: default_chart_types(),
            initial_chart_type: ChartType::Table,
        }
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn with_channels(mut self, channels: impl Into<Vec<Channel>>) -> Self {
        self.channels = channels.into();
        self
    }

    #[must_use]
    pub fn with_chart_types(mut self, chart_types: impl Into<Vec<ChartType>>) -> Self {
        self.chart_types = chart_types.into();
        self
    }

    #[must_use]
    pub fn with_initial_chart_type(mut self, chart_type: ChartType) -> Self {
        self.initial_chart_type = chart_type;
        self
    }

    pub fn validate(&self) -> AutoVegaResult<()> {
        validate_widget_config(self)
    }

    pub fn from_json_str(input: &str) -> AutoVegaResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            AutoVegaError::InvalidConfig(format!("failed to parse widget config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> AutoVegaResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AutoVegaError::InvalidData(format!("failed to serialize widget config: {e}"))
        })
    }
}

fn default_channels() -> Vec<Channel> {
    Channel::DEFAULT_CONTROLS.to_vec()
}

fn default_chart_types() -> Vec<ChartType> {
    ChartType::ALL.to_vec()
}
