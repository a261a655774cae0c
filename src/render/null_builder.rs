use crate::error::AutoVegaResult;
use crate::render::{ChartBuilder, ChartSpec, Renderable};

/// Chart backend used by tests and headless embedding.
///
/// It records every spec it receives so callers can assert on how often and
/// with what a chart was rebuilt.
#[derive(Debug, Default)]
pub struct NullChartBuilder {
    pub build_count: usize,
    pub last_spec: Option<ChartSpec>,
}

impl ChartBuilder for NullChartBuilder {
    fn build_chart(&mut self, spec: &ChartSpec) -> AutoVegaResult<Renderable> {
        self.build_count += 1;
        self.last_spec = Some(spec.clone());
        Ok(Renderable::text(format!("{} chart {}", spec.mark, spec.encoding)))
    }
}
