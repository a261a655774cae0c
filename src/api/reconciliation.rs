use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Channel, ChartType, Column, ColumnCatalog, Encoding, guess_initial_encoding};
use crate::data::Dataset;
use crate::error::{AutoVegaError, AutoVegaResult};
use crate::interaction::{ChartTypeSelector, ControlEvent, ControlPanel};
use crate::render::ChartBuilder;

use super::{RenderDispatcher, WidgetConfig};

/// Why an event did not lead to a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The table is shown; the encoding was still recomputed.
    TableShown,
    /// The edited channel is disabled, so the control did not report the edit.
    ChannelDisabled,
}

/// Decision taken for one mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reconciliation {
    Redrawn { generation: u64 },
    Skipped(SkipReason),
}

impl Reconciliation {
    #[must_use]
    pub fn is_redrawn(self) -> bool {
        matches!(self, Self::Redrawn { .. })
    }
}

/// User-level edit routed through the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SelectChartType(ChartType),
    SelectColumn { channel: Channel, column: Column },
    SetEnabled { channel: Channel, enabled: bool },
}

/// Event a mutation produced (if the mutated control reported one) and the
/// decision taken for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconciliationStep {
    pub event: Option<ControlEvent>,
    pub outcome: Reconciliation,
}

/// Coordinator between the editable controls and the render dispatcher.
///
/// Holds the two reconciled state variables (chart type via the selector,
/// encoding) and recomputes the encoding after every channel edit. A redraw
/// only happens when a chart is shown or the chart type changes.
#[derive(Debug, Clone)]
pub struct ReconciliationController {
    catalog: ColumnCatalog,
    panel: ControlPanel,
    selector: ChartTypeSelector,
    encoding: Encoding,
}

impl ReconciliationController {
    /// Builds controls from the guessed initial encoding.
    ///
    /// Fails with `InsufficientColumns` on an empty catalog; no controller
    /// exists in that case.
    pub fn new(catalog: ColumnCatalog, config: &WidgetConfig) -> AutoVegaResult<Self> {
        let guessed = guess_initial_encoding(&catalog)?;
        let panel = ControlPanel::new(&config.channels, &catalog, &guessed)?;
        let selector =
            ChartTypeSelector::new(config.chart_types.clone(), config.initial_chart_type)?;
        let encoding = panel.derive_encoding();

        Ok(Self {
            catalog,
            panel,
            selector,
            encoding,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &ColumnCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    #[must_use]
    pub fn selector(&self) -> &ChartTypeSelector {
        &self.selector
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.selector.current()
    }

    /// Encoding as of the last processed event.
    #[must_use]
    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    /// Applies a mutation to the owning control and reconciles the result.
    ///
    /// A mutation either completes with the surface showing the new state or
    /// fails and leaves controls, toolbar and encoding as they were. The
    /// surface is only ever replaced by a successful redraw, so on error it
    /// still matches the restored state.
    pub fn apply<D: Dataset, C: ChartBuilder>(
        &mut self,
        mutation: Mutation,
        dispatcher: &mut RenderDispatcher<D, C>,
    ) -> AutoVegaResult<ReconciliationStep> {
        let panel = self.panel.clone();
        let selector = self.selector.clone();
        let encoding = self.encoding.clone();

        let result = self.apply_uncommitted(mutation, dispatcher);
        if let Err(err) = &result {
            warn!(error = %err, "mutation rejected; restoring previous state");
            self.panel = panel;
            self.selector = selector;
            self.encoding = encoding;
        }
        result
    }

    fn apply_uncommitted<D: Dataset, C: ChartBuilder>(
        &mut self,
        mutation: Mutation,
        dispatcher: &mut RenderDispatcher<D, C>,
    ) -> AutoVegaResult<ReconciliationStep> {
        let event = match mutation {
            Mutation::SelectChartType(chart_type) => {
                Some(ControlEvent::ChartTypeChanged(self.selector.select(chart_type)?))
            }
            Mutation::SelectColumn { channel, column } => {
                if !self.catalog.contains(&column) {
                    return Err(AutoVegaError::UnknownColumn(column.name().to_owned()));
                }
                self.panel
                    .control_mut(channel)?
                    .set_selection(column)
                    .map(ControlEvent::ChannelEdited)
            }
            Mutation::SetEnabled { channel, enabled } => Some(ControlEvent::ChannelEdited(
                self.panel.control_mut(channel)?.set_enabled(enabled),
            )),
        };

        let outcome = match event {
            Some(event) => self.handle(event, dispatcher)?,
            None => {
                debug!("edit on disabled channel recorded without redraw");
                Reconciliation::Skipped(SkipReason::ChannelDisabled)
            }
        };
        Ok(ReconciliationStep { event, outcome })
    }

    /// Reacts to one control notification.
    pub fn handle<D: Dataset, C: ChartBuilder>(
        &mut self,
        event: ControlEvent,
        dispatcher: &mut RenderDispatcher<D, C>,
    ) -> AutoVegaResult<Reconciliation> {
        match event {
            ControlEvent::ChartTypeChanged(change) => {
                debug!(
                    previous = %change.previous,
                    current = %change.current,
                    "chart type changed"
                );
                self.redraw(dispatcher)
            }
            ControlEvent::ChannelEdited(edit) => {
                self.encoding = self.panel.derive_encoding();
                debug!(
                    channel = %edit.channel,
                    kind = ?edit.kind,
                    encoding = %self.encoding,
                    "channel edited"
                );
                if self.selector.current().is_table() {
                    return Ok(Reconciliation::Skipped(SkipReason::TableShown));
                }
                self.redraw(dispatcher)
            }
        }
    }

    /// Redraws the current state without any state transition.
    pub fn redraw<D: Dataset, C: ChartBuilder>(
        &self,
        dispatcher: &mut RenderDispatcher<D, C>,
    ) -> AutoVegaResult<Reconciliation> {
        dispatcher.redraw(
            self.selector.current(),
            &self.encoding,
            &self.panel,
            &self.catalog,
        )?;
        Ok(Reconciliation::Redrawn {
            generation: dispatcher.surface().generation(),
        })
    }
}
