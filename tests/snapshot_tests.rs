use autovega::api::{AutoVegaWidget, WIDGET_SNAPSHOT_JSON_SCHEMA_V1, WidgetSnapshot};
use autovega::core::{Channel, ChartType, MarkKind};
use autovega::data::DataTable;
use autovega::render::NullChartBuilder;
use serde_json::{Value, json};

fn widget() -> AutoVegaWidget<DataTable, NullChartBuilder> {
    let mut widget =
        AutoVegaWidget::mount(DataTable::new(["a", "b", "c"]), NullChartBuilder::default())
            .expect("mount");
    widget
        .select_chart_type(ChartType::Scatter)
        .expect("select scatter");
    widget
        .set_channel_enabled(Channel::Color, true)
        .expect("enable color");
    widget
}

#[test]
fn snapshot_captures_controls_and_encoding_in_channel_order() {
    let snapshot = widget().snapshot();

    assert_eq!(snapshot.columns, vec!["a", "b", "c"]);
    assert_eq!(snapshot.chart_type, ChartType::Scatter);
    assert_eq!(snapshot.mark, Some(MarkKind::Point));
    assert_eq!(snapshot.surface_generation, 3);
    assert_eq!(snapshot.redraw_count, 3);

    let channels: Vec<Channel> = snapshot.encoding.keys().copied().collect();
    assert_eq!(channels, vec![Channel::X, Channel::Y, Channel::Color]);
    assert_eq!(snapshot.encoding[&Channel::Color], "a");

    let color = snapshot
        .controls
        .iter()
        .find(|control| control.channel == Channel::Color)
        .expect("color control");
    assert!(color.enabled);
    assert_eq!(color.selected_column.as_deref(), Some("a"));
}

#[test]
fn snapshot_json_uses_lowercase_channel_keys() {
    let text = widget().snapshot_json_pretty().expect("serialize");
    let value: Value = serde_json::from_str(&text).expect("valid json");

    assert_eq!(value["chart_type"], json!("Scatter"));
    assert_eq!(value["mark"], json!("point"));
    assert_eq!(value["encoding"], json!({ "x": "a", "y": "b", "color": "a" }));
}

#[test]
fn json_contract_v1_round_trips_and_accepts_bare_snapshots() {
    let widget = widget();
    let snapshot = widget.snapshot();

    let contract = widget
        .snapshot_json_contract_v1_pretty()
        .expect("contract json");
    let value: Value = serde_json::from_str(&contract).expect("valid json");
    assert_eq!(value["schema_version"], json!(WIDGET_SNAPSHOT_JSON_SCHEMA_V1));
    assert_eq!(
        WidgetSnapshot::from_json_compat_str(&contract).expect("parse contract"),
        snapshot
    );

    let bare = widget.snapshot_json_pretty().expect("bare json");
    assert_eq!(
        WidgetSnapshot::from_json_compat_str(&bare).expect("parse bare"),
        snapshot
    );
}

#[test]
fn json_contract_rejects_unknown_schema_versions() {
    let snapshot = widget().snapshot();
    let payload = json!({ "schema_version": 99, "snapshot": snapshot });

    let err = WidgetSnapshot::from_json_compat_str(&payload.to_string())
        .expect_err("unsupported version");
    assert!(err.to_string().contains("schema version 99 is not supported"));
}
