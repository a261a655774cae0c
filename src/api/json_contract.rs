use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::Dataset;
use crate::error::{AutoVegaError, AutoVegaResult};
use crate::render::ChartBuilder;

use super::{AutoVegaWidget, WidgetSnapshot};

pub const WIDGET_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope around a widget snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: WidgetSnapshot,
}

impl WidgetSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> AutoVegaResult<String> {
        let envelope = WidgetSnapshotJsonContractV1 {
            schema_version: WIDGET_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&envelope).map_err(|e| {
            AutoVegaError::InvalidData(format!("cannot encode widget snapshot envelope: {e}"))
        })
    }

    /// Reads either a versioned envelope or a bare snapshot document.
    ///
    /// A document carrying `schema_version` is always treated as an envelope,
    /// so an unknown version is reported instead of being misread.
    pub fn from_json_compat_str(input: &str) -> AutoVegaResult<Self> {
        let document: Value = serde_json::from_str(input).map_err(|e| {
            AutoVegaError::InvalidData(format!("widget snapshot is not valid json: {e}"))
        })?;

        if document.get("schema_version").is_none() {
            return serde_json::from_value(document).map_err(|e| {
                AutoVegaError::InvalidData(format!("malformed widget snapshot: {e}"))
            });
        }

        let envelope: WidgetSnapshotJsonContractV1 =
            serde_json::from_value(document).map_err(|e| {
                AutoVegaError::InvalidData(format!("malformed widget snapshot envelope: {e}"))
            })?;
        if envelope.schema_version != WIDGET_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(AutoVegaError::InvalidData(format!(
                "widget snapshot schema version {} is not supported (expected {})",
                envelope.schema_version, WIDGET_SNAPSHOT_JSON_SCHEMA_V1
            )));
        }
        Ok(envelope.snapshot)
    }
}

impl<D: Dataset, C: ChartBuilder> AutoVegaWidget<D, C> {
    /// Snapshot wrapped in the v1 envelope, pretty-printed.
    pub fn snapshot_json_contract_v1_pretty(&self) -> AutoVegaResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
