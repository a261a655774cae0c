use crate::core::{Channel, ChartType, ColumnCatalog, Encoding};
use crate::data::Dataset;
use crate::error::AutoVegaResult;
use crate::extensions::{WidgetEvent, WidgetObserver};
use crate::interaction::ChannelControl;
use crate::render::{ChartBuilder, OutputSurface, Renderable, RenderedOutput};

use super::{ReconciliationController, RenderDispatcher};

/// Dataset explorer widget consumed by host display environments.
///
/// `AutoVegaWidget` ties the reconciliation controller (channel controls,
/// chart-type toolbar, derived encoding) to the render dispatcher (dataset,
/// chart backend, output surface). All mutations go through `&mut self`, so
/// events are processed strictly one after another.
pub struct AutoVegaWidget<D: Dataset, C: ChartBuilder> {
    pub(super) controller: ReconciliationController,
    pub(super) dispatcher: RenderDispatcher<D, C>,
    pub(super) observers: Vec<Box<dyn WidgetObserver>>,
}

impl<D: Dataset, C: ChartBuilder> AutoVegaWidget<D, C> {
    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.controller.chart_type()
    }

    #[must_use]
    pub fn chart_types(&self) -> &[ChartType] {
        self.controller.selector().options()
    }

    #[must_use]
    pub fn encoding(&self) -> &Encoding {
        self.controller.encoding()
    }

    #[must_use]
    pub fn channel_control(&self, channel: Channel) -> Option<&ChannelControl> {
        self.controller.panel().control(channel)
    }

    #[must_use]
    pub fn catalog(&self) -> &ColumnCatalog {
        self.controller.catalog()
    }

    /// Output of the most recent redraw.
    #[must_use]
    pub fn output(&self) -> Option<&RenderedOutput> {
        self.dispatcher.last_output()
    }

    #[must_use]
    pub fn surface(&self) -> &OutputSurface {
        self.dispatcher.surface()
    }

    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.dispatcher.redraw_count()
    }

    #[must_use]
    pub fn chart_builder(&self) -> &C {
        self.dispatcher.chart_builder()
    }

    /// Current visual state: toolbar followed by the output surface.
    #[must_use]
    pub fn render(&self) -> Renderable {
        let toolbar = self.controller.selector().render_toolbar();
        Renderable::stack(std::iter::once(&toolbar).chain(self.dispatcher.surface().items()))
    }

    /// Redraws with unchanged state. Repeated calls produce equal output.
    pub fn redraw(&mut self) -> AutoVegaResult<RenderedOutput> {
        let output = self
            .dispatcher
            .redraw(
                self.controller.chart_type(),
                self.controller.encoding(),
                self.controller.panel(),
                self.controller.catalog(),
            )?;
        self.emit_observer_event(WidgetEvent::Redrawn {
            chart_type: output.chart_type(),
            generation: self.dispatcher.surface().generation(),
        });
        Ok(output)
    }

    #[must_use]
    pub fn into_parts(self) -> (D, C) {
        self.dispatcher.into_parts()
    }
}
