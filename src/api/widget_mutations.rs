use crate::core::{Channel, ChartType};
use crate::data::Dataset;
use crate::error::{AutoVegaError, AutoVegaResult};
use crate::extensions::WidgetEvent;
use crate::interaction::ControlEvent;
use crate::render::ChartBuilder;

use super::{AutoVegaWidget, Mutation, Reconciliation, SkipReason};

impl<D: Dataset, C: ChartBuilder> AutoVegaWidget<D, C> {
    /// Toolbar click.
    pub fn select_chart_type(&mut self, chart_type: ChartType) -> AutoVegaResult<Reconciliation> {
        self.apply(Mutation::SelectChartType(chart_type))
    }

    /// Dropdown change. `column` must name a catalog column.
    pub fn select_column(
        &mut self,
        channel: Channel,
        column: &str,
    ) -> AutoVegaResult<Reconciliation> {
        let column = self
            .controller
            .catalog()
            .get(column)
            .cloned()
            .ok_or_else(|| AutoVegaError::UnknownColumn(column.to_owned()))?;
        self.apply(Mutation::SelectColumn { channel, column })
    }

    /// Enable checkbox toggle.
    pub fn set_channel_enabled(
        &mut self,
        channel: Channel,
        enabled: bool,
    ) -> AutoVegaResult<Reconciliation> {
        self.apply(Mutation::SetEnabled { channel, enabled })
    }

    pub fn apply(&mut self, mutation: Mutation) -> AutoVegaResult<Reconciliation> {
        let step = self.controller.apply(mutation, &mut self.dispatcher)?;

        match step.event {
            Some(ControlEvent::ChartTypeChanged(change)) => {
                self.emit_observer_event(WidgetEvent::ChartTypeChanged(change));
            }
            Some(ControlEvent::ChannelEdited(edit)) => {
                self.emit_observer_event(WidgetEvent::ChannelEdited(edit));
            }
            None => {}
        }
        match step.outcome {
            Reconciliation::Redrawn { generation } => {
                self.emit_observer_event(WidgetEvent::Redrawn {
                    chart_type: self.controller.chart_type(),
                    generation,
                });
            }
            Reconciliation::Skipped(SkipReason::TableShown) => {
                self.emit_observer_event(WidgetEvent::RedrawSkipped {
                    reason: SkipReason::TableShown,
                });
            }
            Reconciliation::Skipped(SkipReason::ChannelDisabled) => {}
        }

        Ok(step.outcome)
    }
}
