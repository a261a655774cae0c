use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::{Column, Encoding, MarkKind};

/// Mark plus encoding: the value handed to a chart backend on every redraw.
///
/// Rebuilt from scratch for each redraw and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub mark: MarkKind,
    pub encoding: Encoding,
}

impl ChartSpec {
    #[must_use]
    pub fn new(mark: MarkKind, encoding: Encoding) -> Self {
        Self { mark, encoding }
    }

    /// Vega-Lite `encoding` object, one field definition per bound channel.
    #[must_use]
    pub fn vega_lite_encoding(&self) -> Value {
        self.vega_lite_encoding_with(|_| None)
    }

    /// Same as `vega_lite_encoding`, adding a `type` to every field for which
    /// `field_type` knows one.
    pub fn vega_lite_encoding_with<F>(&self, field_type: F) -> Value
    where
        F: Fn(&Column) -> Option<FieldType>,
    {
        let mut channels = Map::new();
        for (channel, column) in self.encoding.iter() {
            let mut definition = Map::new();
            definition.insert("field".to_owned(), json!(escape_field_name(column.name())));
            if let Some(kind) = field_type(column) {
                definition.insert("type".to_owned(), json!(kind.as_str()));
            }
            channels.insert(channel.as_str().to_owned(), Value::Object(definition));
        }
        Value::Object(channels)
    }
}

/// Vega-Lite measurement type of an encoded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Nominal,
}

impl FieldType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quantitative => "quantitative",
            Self::Nominal => "nominal",
        }
    }

    /// `Quantitative` when at least one value is present and every non-null
    /// value is a number, `Nominal` otherwise.
    pub fn infer<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut seen_number = false;
        for value in values {
            match value {
                Value::Null => {}
                Value::Number(_) => seen_number = true,
                _ => return Self::Nominal,
            }
        }
        if seen_number {
            Self::Quantitative
        } else {
            Self::Nominal
        }
    }
}

/// Escapes characters Vega-Lite would otherwise read as nested field access.
#[must_use]
pub fn escape_field_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for ch in name.chars() {
        if matches!(ch, '.' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
