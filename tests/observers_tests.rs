use std::cell::RefCell;
use std::rc::Rc;

use autovega::AutoVegaError;
use autovega::api::{AutoVegaWidget, SkipReason};
use autovega::core::{Channel, ChartType};
use autovega::data::DataTable;
use autovega::extensions::{WidgetContext, WidgetEvent, WidgetObserver};
use autovega::render::NullChartBuilder;

#[derive(Clone)]
struct RecordingObserver {
    id: String,
    events: Rc<RefCell<Vec<(WidgetEvent, WidgetContext)>>>,
}

impl RecordingObserver {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(WidgetEvent, WidgetContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl WidgetObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: WidgetEvent, context: WidgetContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &WidgetEvent) -> &'static str {
    match event {
        WidgetEvent::ChartTypeChanged(_) => "chart_type",
        WidgetEvent::ChannelEdited(_) => "channel",
        WidgetEvent::Redrawn { .. } => "redrawn",
        WidgetEvent::RedrawSkipped { .. } => "skipped",
    }
}

fn mount() -> AutoVegaWidget<DataTable, NullChartBuilder> {
    AutoVegaWidget::mount(DataTable::new(["a", "b", "c"]), NullChartBuilder::default())
        .expect("mount")
}

#[test]
fn observer_receives_deterministic_event_sequence() {
    let mut widget = mount();
    let events = Rc::new(RefCell::new(Vec::new()));
    widget
        .register_observer(Box::new(RecordingObserver::new("recorder", events.clone())))
        .expect("register observer");

    widget.select_column(Channel::X, "c").expect("edit x");
    widget
        .select_chart_type(ChartType::Scatter)
        .expect("select scatter");
    widget
        .select_column(Channel::Color, "b")
        .expect("edit disabled color");
    widget
        .set_channel_enabled(Channel::Color, true)
        .expect("enable color");
    widget.redraw().expect("redraw");

    let events = events.borrow();
    let kinds: Vec<&'static str> = events.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(
        kinds,
        vec![
            "channel",
            "skipped",
            "chart_type",
            "redrawn",
            "channel",
            "redrawn",
            "redrawn",
        ]
    );
    assert_eq!(
        events[1].0,
        WidgetEvent::RedrawSkipped {
            reason: SkipReason::TableShown
        }
    );
}

#[test]
fn observer_context_reflects_state_after_each_step() {
    let mut widget = mount();
    let events = Rc::new(RefCell::new(Vec::new()));
    widget
        .register_observer(Box::new(RecordingObserver::new("recorder", events.clone())))
        .expect("register observer");

    widget.select_chart_type(ChartType::Bar).expect("select bar");
    widget
        .set_channel_enabled(Channel::Y, false)
        .expect("disable y");

    let events = events.borrow();
    let (last_event, last_context) = events.last().copied().expect("events");
    assert_eq!(
        last_event,
        WidgetEvent::Redrawn {
            chart_type: ChartType::Bar,
            generation: 3
        }
    );
    assert_eq!(last_context.chart_type, ChartType::Bar);
    assert_eq!(last_context.bound_channels, 1);
    assert_eq!(last_context.surface_generation, 3);
    assert_eq!(last_context.redraw_count, 3);
}

#[test]
fn observer_registration_validates_ids() {
    let mut widget = mount();
    let events = Rc::new(RefCell::new(Vec::new()));

    let err = widget
        .register_observer(Box::new(RecordingObserver::new("", events.clone())))
        .expect_err("empty id");
    assert!(matches!(err, AutoVegaError::InvalidData(_)));

    widget
        .register_observer(Box::new(RecordingObserver::new("one", events.clone())))
        .expect("first registration");
    let err = widget
        .register_observer(Box::new(RecordingObserver::new("one", events.clone())))
        .expect_err("duplicate id");
    assert!(matches!(err, AutoVegaError::InvalidData(_)));
    assert!(err.to_string().contains("already attached to this widget"));
    assert_eq!(widget.observer_count(), 1);

    assert!(widget.unregister_observer("one"));
    assert!(!widget.unregister_observer("one"));
    assert!(!widget.has_observer("one"));

    widget.select_chart_type(ChartType::Line).expect("select line");
    assert!(events.borrow().is_empty());
}
