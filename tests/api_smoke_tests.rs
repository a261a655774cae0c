use autovega::api::{AutoVegaWidget, Reconciliation};
use autovega::core::{Channel, ChartType, MarkKind};
use autovega::data::DataTable;
use autovega::render::{MIME_TEXT_HTML, MIME_VEGA_LITE_V5, NullChartBuilder, VegaLiteChartBuilder};
use serde_json::json;

fn sample_table() -> DataTable {
    DataTable::new(["year", "sales", "region"])
        .with_rows(vec![
            vec![json!(2020), json!(12.5), json!("north")],
            vec![json!(2021), json!(14.0), json!("south")],
            vec![json!(2022), json!(9.75), json!("north")],
        ])
        .expect("valid rows")
}

#[test]
fn widget_smoke_flow() {
    let mut widget =
        AutoVegaWidget::mount(sample_table(), NullChartBuilder::default()).expect("mount");

    assert_eq!(widget.chart_type(), ChartType::Table);
    assert_eq!(widget.redraw_count(), 1);
    assert_eq!(widget.encoding().to_string(), "{x: year, y: sales}");

    let outcome = widget
        .select_chart_type(ChartType::Line)
        .expect("select line");
    assert!(outcome.is_redrawn());

    widget
        .set_channel_enabled(Channel::Color, true)
        .expect("enable color");
    widget
        .select_column(Channel::Color, "region")
        .expect("color by region");

    let spec = widget
        .output()
        .and_then(|output| output.spec())
        .expect("chart spec");
    assert_eq!(spec.mark, MarkKind::Line);
    assert_eq!(spec.encoding.to_string(), "{x: year, y: sales, color: region}");
    assert_eq!(widget.chart_builder().build_count, 3);

    let back_to_table = widget
        .select_chart_type(ChartType::Table)
        .expect("select table");
    assert_eq!(back_to_table, Reconciliation::Redrawn { generation: 5 });
    assert!(!widget.output().expect("output").is_chart());
}

#[test]
fn render_pull_stacks_toolbar_over_surface() {
    let mut widget =
        AutoVegaWidget::mount(sample_table(), NullChartBuilder::default()).expect("mount");

    let table_view = widget.render();
    let text = table_view.text_plain().expect("plain text");
    assert!(text.starts_with("[Table] Scatter Line Bar\n"));
    assert!(text.contains("year  sales  region"));

    widget
        .select_chart_type(ChartType::Scatter)
        .expect("select scatter");
    let chart_view = widget.render();
    assert_eq!(
        chart_view.text_plain(),
        Some(
            "Table [Scatter] Line Bar\n\
             X: year [x] Enabled\n\
             Y: sales [x] Enabled\n\
             Color: - [ ] Enabled\n\
             point chart {x: year, y: sales}"
        )
    );
}

#[test]
fn vega_lite_backend_exposes_spec_through_render() {
    let table = sample_table();
    let builder = VegaLiteChartBuilder::from_table(&table);
    let mut widget = AutoVegaWidget::mount(table, builder).expect("mount");
    widget.select_chart_type(ChartType::Bar).expect("select bar");

    let view = widget.render();
    let payload = view.get(MIME_VEGA_LITE_V5).expect("vega-lite payload");
    let document: serde_json::Value = serde_json::from_str(payload).expect("valid json");
    assert_eq!(document["mark"], json!("bar"));
    assert_eq!(document["encoding"]["y"]["field"], json!("sales"));
    assert_eq!(document["encoding"]["x"]["type"], json!("quantitative"));
    assert_eq!(document["data"]["values"].as_array().map(Vec::len), Some(3));
    assert!(view.get(MIME_TEXT_HTML).expect("html").contains("vegaEmbed"));
}
