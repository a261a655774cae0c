use crate::data::Dataset;
use crate::extensions::{WidgetContext, WidgetEvent};
use crate::render::ChartBuilder;

use super::AutoVegaWidget;

impl<D: Dataset, C: ChartBuilder> AutoVegaWidget<D, C> {
    pub(super) fn observer_context(&self) -> WidgetContext {
        WidgetContext {
            chart_type: self.controller.chart_type(),
            mark: self.controller.chart_type().mark(),
            bound_channels: self.controller.encoding().len(),
            surface_generation: self.dispatcher.surface().generation(),
            redraw_count: self.dispatcher.redraw_count(),
        }
    }

    pub(super) fn emit_observer_event(&mut self, event: WidgetEvent) {
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
