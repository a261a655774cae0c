mod chart_spec;
mod null_builder;
mod output_surface;
mod renderable;
mod rendered_output;
mod vega_lite_builder;

pub use chart_spec::{ChartSpec, FieldType, escape_field_name};
pub use null_builder::NullChartBuilder;
pub use output_surface::{OutputSurface, SurfaceItems};
pub use renderable::{MIME_TEXT_HTML, MIME_TEXT_PLAIN, MIME_VEGA_LITE_V5, Renderable, escape_html};
pub use rendered_output::RenderedOutput;
pub use vega_lite_builder::{VEGA_LITE_V5_SCHEMA, VegaLiteChartBuilder};

use crate::error::AutoVegaResult;

/// Contract implemented by any declarative chart-rendering backend.
///
/// Backends receive a fully materialized `ChartSpec` on every chart redraw and
/// turn it into a displayable artifact. They never see widget state.
pub trait ChartBuilder {
    fn build_chart(&mut self, spec: &ChartSpec) -> AutoVegaResult<Renderable>;
}
