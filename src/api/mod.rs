//! Public widget facade and the reconciliation engine behind it.

mod display;
mod json_contract;
mod observer_dispatch;
mod observer_registry;
mod reconciliation;
mod render_dispatcher;
mod validation;
mod widget;
mod widget_config;
mod widget_init;
mod widget_mutations;
mod widget_snapshot;

pub use display::{
    DATA_TABLE_TYPE_NAME, DisplayEnvironment, DisplayFormatterFn, FormatterRegistry,
    display_table, register_renderer, register_renderer_with,
};
pub use json_contract::{WIDGET_SNAPSHOT_JSON_SCHEMA_V1, WidgetSnapshotJsonContractV1};
pub use reconciliation::{
    Mutation, Reconciliation, ReconciliationController, ReconciliationStep, SkipReason,
};
pub use render_dispatcher::RenderDispatcher;
pub use widget::AutoVegaWidget;
pub use widget_config::WidgetConfig;
pub use widget_snapshot::WidgetSnapshot;
