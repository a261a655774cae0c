use thiserror::Error;

use crate::core::{Channel, ChartType};

pub type AutoVegaResult<T> = Result<T, AutoVegaError>;

#[derive(Debug, Error)]
pub enum AutoVegaError {
    #[error("insufficient columns to guess an initial encoding: found {found}")]
    InsufficientColumns { found: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    #[error("channel `{0}` has no control in this widget")]
    UnknownChannel(Channel),

    #[error("chart type `{0}` is not registered in this widget")]
    UnknownChartType(ChartType),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl AutoVegaError {
    /// Returns `true` for failures that prevent a widget from mounting.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientColumns { .. } | Self::InvalidConfig(_)
        )
    }
}
