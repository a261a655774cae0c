use tracing::debug;

use crate::core::ColumnCatalog;
use crate::data::Dataset;
use crate::error::AutoVegaResult;
use crate::render::ChartBuilder;

use super::{AutoVegaWidget, ReconciliationController, RenderDispatcher, WidgetConfig};

impl<D: Dataset, C: ChartBuilder> AutoVegaWidget<D, C> {
    /// Mounts a widget with the default configuration.
    pub fn mount(dataset: D, chart_builder: C) -> AutoVegaResult<Self> {
        Self::mount_with_config(dataset, chart_builder, WidgetConfig::default())
    }

    /// Snapshots the dataset's columns, guesses the initial encoding and draws
    /// the initial chart type.
    ///
    /// Any failure is terminal: no widget is returned, so nothing is ever
    /// displayed in a partially initialized state.
    pub fn mount_with_config(
        dataset: D,
        chart_builder: C,
        config: WidgetConfig,
    ) -> AutoVegaResult<Self> {
        config.validate()?;
        let catalog = ColumnCatalog::new(dataset.columns())?;
        let controller = ReconciliationController::new(catalog, &config)?;
        let mut dispatcher = RenderDispatcher::new(dataset, chart_builder);
        controller.redraw(&mut dispatcher)?;

        debug!(
            columns = controller.catalog().len(),
            chart_type = %controller.chart_type(),
            encoding = %controller.encoding(),
            "widget mounted"
        );

        Ok(Self {
            controller,
            dispatcher,
            observers: Vec::new(),
        })
    }
}
