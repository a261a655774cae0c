use std::cell::RefCell;
use std::rc::Rc;

use autovega::api::{AutoVegaWidget, WidgetConfig};
use autovega::core::{Channel, ChartType};
use autovega::data::DataTable;
use autovega::extensions::{WidgetContext, WidgetEvent, WidgetObserver};
use autovega::render::{ChartBuilder, ChartSpec, Renderable};
use autovega::{AutoVegaError, AutoVegaResult};

/// Builds `budget` charts, then rejects every further build.
struct LimitedChartBuilder {
    budget: usize,
}

impl ChartBuilder for LimitedChartBuilder {
    fn build_chart(&mut self, spec: &ChartSpec) -> AutoVegaResult<Renderable> {
        if self.budget == 0 {
            return Err(AutoVegaError::InvalidData("chart backend unavailable".to_owned()));
        }
        self.budget -= 1;
        Ok(Renderable::text(format!("{} chart {}", spec.mark, spec.encoding)))
    }
}

struct EventCounter {
    events: Rc<RefCell<Vec<WidgetEvent>>>,
}

impl WidgetObserver for EventCounter {
    fn id(&self) -> &str {
        "counter"
    }

    fn on_event(&mut self, event: WidgetEvent, _context: WidgetContext) {
        self.events.borrow_mut().push(event);
    }
}

fn mount(budget: usize) -> AutoVegaWidget<DataTable, LimitedChartBuilder> {
    AutoVegaWidget::mount(
        DataTable::new(["a", "b", "c"]),
        LimitedChartBuilder { budget },
    )
    .expect("mount")
}

#[test]
fn failed_chart_type_switch_keeps_table_toolbar_and_surface_in_sync() {
    let mut widget = mount(0);
    let before = widget.snapshot();

    let err = widget
        .select_chart_type(ChartType::Bar)
        .expect_err("backend rejects the chart");
    assert!(matches!(err, AutoVegaError::InvalidData(_)));

    assert_eq!(widget.chart_type(), ChartType::Table);
    assert_eq!(widget.output().expect("output").chart_type(), ChartType::Table);
    let view = widget.render();
    assert!(
        view.text_plain()
            .expect("plain text")
            .starts_with("[Table] Scatter Line Bar\n")
    );
    assert_eq!(widget.snapshot(), before);
}

#[test]
fn failed_channel_edit_restores_controls_and_encoding() {
    let mut widget = mount(1);
    widget
        .select_chart_type(ChartType::Scatter)
        .expect("first chart fits the budget");
    let before = widget.snapshot();
    let events = Rc::new(RefCell::new(Vec::new()));
    widget
        .register_observer(Box::new(EventCounter {
            events: events.clone(),
        }))
        .expect("register observer");

    widget
        .select_column(Channel::Y, "c")
        .expect_err("backend rejects the redraw");
    widget
        .set_channel_enabled(Channel::Color, true)
        .expect_err("backend rejects the redraw");

    assert_eq!(widget.snapshot(), before);
    assert_eq!(widget.encoding().to_string(), "{x: a, y: b}");
    let spec = widget.output().and_then(|output| output.spec()).expect("spec");
    assert_eq!(&spec.encoding, widget.encoding());
    assert!(events.borrow().is_empty());
}

#[test]
fn failing_initial_chart_aborts_mount() {
    let config = WidgetConfig::default().with_initial_chart_type(ChartType::Line);
    let err = AutoVegaWidget::mount_with_config(
        DataTable::new(["a"]),
        LimitedChartBuilder { budget: 0 },
        config,
    )
    .err()
    .expect("mount must fail");
    assert!(matches!(err, AutoVegaError::InvalidData(_)));
}
