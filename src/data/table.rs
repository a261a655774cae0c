use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AutoVegaError, AutoVegaResult};
use crate::render::{MIME_TEXT_HTML, MIME_TEXT_PLAIN, Renderable, escape_html};

use super::Dataset;

/// Row-oriented in-memory table with named columns.
///
/// Every row has exactly one cell per column, whether it was pushed or
/// deserialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "DataTableDocument")]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

#[derive(Deserialize)]
struct DataTableDocument {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

impl TryFrom<DataTableDocument> for DataTable {
    type Error = AutoVegaError;

    fn try_from(document: DataTableDocument) -> Result<Self, Self::Error> {
        Self::new(document.columns).with_rows(document.rows)
    }
}

impl DataTable {
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: Vec<Vec<Value>>) -> AutoVegaResult<Self> {
        for row in rows {
            self.push_row(row)?;
        }
        Ok(self)
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> AutoVegaResult<()> {
        if row.len() != self.columns.len() {
            return Err(AutoVegaError::InvalidData(format!(
                "row has {} cells but table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Rows as column-keyed records, the inline data format Vega-Lite expects.
    #[must_use]
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Fixed-width text grid with a leading row index column.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        if self.rows.is_empty() {
            return format!(
                "Empty DataTable\nColumns: [{}]\nIndex: []",
                self.columns.join(", ")
            );
        }

        let index_labels: Vec<String> = (0..self.rows.len()).map(|i| i.to_string()).collect();
        let index_width = index_labels.iter().map(String::len).max().unwrap_or(0);

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(col, name)| {
                cells
                    .iter()
                    .map(|row| row.get(col).map_or(0, |cell| cell.chars().count()))
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        let mut header = " ".repeat(index_width);
        for (name, width) in self.columns.iter().zip(&widths) {
            header.push_str(&format!("  {name:>width$}"));
        }
        lines.push(header);

        for (label, row) in index_labels.iter().zip(&cells) {
            let mut line = format!("{label:<index_width$}");
            for (cell, width) in row.iter().zip(&widths) {
                line.push_str(&format!("  {cell:>width$}"));
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table border=\"1\" class=\"dataframe\">\n");
        html.push_str("  <thead>\n    <tr>\n      <th></th>\n");
        for name in &self.columns {
            html.push_str(&format!("      <th>{}</th>\n", escape_html(name)));
        }
        html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
        for (index, row) in self.rows.iter().enumerate() {
            html.push_str(&format!("    <tr>\n      <th>{index}</th>\n"));
            for value in row {
                html.push_str(&format!("      <td>{}</td>\n", escape_html(&cell_text(value))));
            }
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n</table>");
        html
    }
}

impl Dataset for DataTable {
    fn columns(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn table_representation(&self) -> Renderable {
        Renderable::new()
            .with_mime(MIME_TEXT_PLAIN, self.to_plain_text())
            .with_mime(MIME_TEXT_HTML, self.to_html())
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "NaN".to_owned(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
