use tracing::{debug, warn};

use crate::core::{ChartType, ColumnCatalog, Encoding};
use crate::data::Dataset;
use crate::error::{AutoVegaError, AutoVegaResult};
use crate::interaction::ControlPanel;
use crate::render::{ChartBuilder, ChartSpec, OutputSurface, RenderedOutput};

/// Owner of the output surface and of both rendering collaborators.
///
/// Every redraw is a full re-derivation: the new content is built first and
/// then swapped onto the surface in one step.
pub struct RenderDispatcher<D: Dataset, C: ChartBuilder> {
    dataset: D,
    chart_builder: C,
    surface: OutputSurface,
    last_output: Option<RenderedOutput>,
    redraw_count: u64,
}

impl<D: Dataset, C: ChartBuilder> RenderDispatcher<D, C> {
    #[must_use]
    pub fn new(dataset: D, chart_builder: C) -> Self {
        Self {
            dataset,
            chart_builder,
            surface: OutputSurface::default(),
            last_output: None,
            redraw_count: 0,
        }
    }

    /// Shows the table or builds a chart for `(chart_type, encoding)`.
    ///
    /// Chart redraws re-display the control panel next to the chart.
    pub fn redraw(
        &mut self,
        chart_type: ChartType,
        encoding: &Encoding,
        panel: &ControlPanel,
        catalog: &ColumnCatalog,
    ) -> AutoVegaResult<RenderedOutput> {
        let output = match chart_type.mark() {
            None => RenderedOutput::Table {
                table: self.dataset.table_representation(),
            },
            Some(mark) => {
                ensure_encoding_within_catalog(encoding, catalog)?;
                let spec = ChartSpec::new(mark, encoding.clone());
                let chart = self.chart_builder.build_chart(&spec)?;
                RenderedOutput::Chart {
                    chart_type,
                    panel: panel.render(catalog),
                    chart,
                    spec,
                }
            }
        };

        self.surface.replace(output.surface_items());
        self.redraw_count += 1;
        debug!(
            chart_type = %chart_type,
            encoding = %encoding,
            generation = self.surface.generation(),
            "redrawn"
        );
        self.last_output = Some(output.clone());
        Ok(output)
    }

    #[must_use]
    pub fn surface(&self) -> &OutputSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_output(&self) -> Option<&RenderedOutput> {
        self.last_output.as_ref()
    }

    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    #[must_use]
    pub fn chart_builder(&self) -> &C {
        &self.chart_builder
    }

    #[must_use]
    pub fn into_parts(self) -> (D, C) {
        (self.dataset, self.chart_builder)
    }
}

fn ensure_encoding_within_catalog(
    encoding: &Encoding,
    catalog: &ColumnCatalog,
) -> AutoVegaResult<()> {
    for (channel, column) in encoding.iter() {
        if !catalog.contains(column) {
            warn!(channel = %channel, column = %column, "encoding references a foreign column");
            return Err(AutoVegaError::InvariantViolation(format!(
                "channel `{channel}` is bound to column `{column}` outside the catalog"
            )));
        }
    }
    Ok(())
}
