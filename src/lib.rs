//! autovega: headless dataframe explorer widget.
//!
//! The crate keeps a set of channel controls, a chart-type selection and a
//! declarative chart specification consistent with each other, and decides on
//! every edit whether the output surface has to be redrawn. Datasets, chart
//! rendering and host display environments are consumed through traits.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{AutoVegaWidget, WidgetConfig, display_table, register_renderer};
pub use error::{AutoVegaError, AutoVegaResult};
