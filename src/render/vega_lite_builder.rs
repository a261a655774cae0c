use serde_json::{Map, Value, json};
use tracing::trace;

use crate::data::DataTable;
use crate::error::{AutoVegaError, AutoVegaResult};

use super::{
    ChartBuilder, ChartSpec, FieldType, MIME_TEXT_HTML, MIME_TEXT_PLAIN, MIME_VEGA_LITE_V5,
    Renderable,
};

pub const VEGA_LITE_V5_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Chart backend that emits Vega-Lite v5 documents with inline data values.
///
/// The produced renderable carries the raw spec under the Vega-Lite MIME type
/// plus an HTML form that embeds it through `vegaEmbed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VegaLiteChartBuilder {
    values: Vec<Map<String, Value>>,
    title: Option<String>,
}

impl VegaLiteChartBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_table(table: &DataTable) -> Self {
        Self::new().with_values(table.records())
    }

    #[must_use]
    pub fn with_values(mut self, values: Vec<Map<String, Value>>) -> Self {
        self.values = values;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Full Vega-Lite document for one chart spec.
    #[must_use]
    pub fn document(&self, spec: &ChartSpec) -> Value {
        let mut document = Map::new();
        document.insert("$schema".to_owned(), json!(VEGA_LITE_V5_SCHEMA));
        if let Some(title) = &self.title {
            document.insert("title".to_owned(), json!(title));
        }
        document.insert("data".to_owned(), json!({ "values": self.values }));
        document.insert("mark".to_owned(), json!(spec.mark.as_str()));
        document.insert(
            "encoding".to_owned(),
            spec.vega_lite_encoding_with(|column| Some(self.field_type(column.name()))),
        );
        Value::Object(document)
    }

    /// Measurement type of `field` as seen in the inline values.
    #[must_use]
    pub fn field_type(&self, field: &str) -> FieldType {
        FieldType::infer(self.values.iter().filter_map(|record| record.get(field)))
    }
}

impl ChartBuilder for VegaLiteChartBuilder {
    fn build_chart(&mut self, spec: &ChartSpec) -> AutoVegaResult<Renderable> {
        let document = self.document(spec);
        let payload = serde_json::to_string(&document).map_err(|e| {
            AutoVegaError::InvalidData(format!("failed to serialize vega-lite spec: {e}"))
        })?;
        trace!(mark = %spec.mark, encoding = %spec.encoding, "built vega-lite chart");

        let html = format!(
            "<div class=\"autovega-chart\"></div>\n<script type=\"text/javascript\">\
             vegaEmbed(document.currentScript.previousElementSibling, {payload});</script>"
        );
        Ok(Renderable::new()
            .with_mime(MIME_TEXT_PLAIN, format!("<VegaLite 5 {} chart>", spec.mark))
            .with_mime(MIME_TEXT_HTML, html)
            .with_mime(MIME_VEGA_LITE_V5, payload))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{VEGA_LITE_V5_SCHEMA, VegaLiteChartBuilder};
    use crate::core::{Channel, Column, Encoding, MarkKind};
    use crate::data::DataTable;
    use crate::render::{ChartBuilder, ChartSpec, MIME_VEGA_LITE_V5};

    #[test]
    fn document_inlines_table_records_and_encoding() {
        let table = DataTable::new(["a", "b"])
            .with_rows(vec![vec![json!(1), json!(2)]])
            .expect("rows");
        let encoding: Encoding = [
            (Channel::X, Column::new("a", 0)),
            (Channel::Y, Column::new("b", 1)),
        ]
        .into_iter()
        .collect();
        let spec = ChartSpec::new(MarkKind::Line, encoding);

        let mut builder = VegaLiteChartBuilder::from_table(&table).with_title("demo");
        let rendered = builder.build_chart(&spec).expect("build chart");
        let payload = rendered.get(MIME_VEGA_LITE_V5).expect("vega-lite payload");
        let document: Value = serde_json::from_str(payload).expect("valid json");

        assert_eq!(
            document,
            json!({
                "$schema": VEGA_LITE_V5_SCHEMA,
                "title": "demo",
                "data": { "values": [{ "a": 1, "b": 2 }] },
                "mark": "line",
                "encoding": {
                    "x": { "field": "a", "type": "quantitative" },
                    "y": { "field": "b", "type": "quantitative" }
                }
            })
        );
        assert_eq!(rendered.text_plain(), Some("<VegaLite 5 line chart>"));
    }

    #[test]
    fn numeric_fields_are_quantitative_and_others_nominal() {
        let table = DataTable::new(["year", "region", "sales"])
            .with_rows(vec![
                vec![json!(2020), json!("north"), json!(12.5)],
                vec![json!(2021), json!("south"), json!(null)],
            ])
            .expect("rows");
        let encoding: Encoding = [
            (Channel::X, Column::new("year", 0)),
            (Channel::Y, Column::new("sales", 2)),
            (Channel::Color, Column::new("region", 1)),
        ]
        .into_iter()
        .collect();
        let spec = ChartSpec::new(MarkKind::Point, encoding);

        let document = VegaLiteChartBuilder::from_table(&table).document(&spec);
        assert_eq!(
            document["encoding"],
            json!({
                "x": { "field": "year", "type": "quantitative" },
                "y": { "field": "sales", "type": "quantitative" },
                "color": { "field": "region", "type": "nominal" }
            })
        );
    }

    #[test]
    fn fields_without_values_fall_back_to_nominal() {
        let encoding: Encoding = [(Channel::X, Column::new("a", 0))].into_iter().collect();
        let spec = ChartSpec::new(MarkKind::Bar, encoding);

        let document = VegaLiteChartBuilder::new().document(&spec);
        assert_eq!(document["encoding"]["x"]["type"], json!("nominal"));
    }
}
