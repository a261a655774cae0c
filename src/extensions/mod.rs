//! Optional hooks for hosts that want to observe widget activity.

mod observers;

pub use observers::{WidgetContext, WidgetEvent, WidgetObserver};
