use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::data::DataTable;
use crate::error::AutoVegaResult;
use crate::render::{Renderable, VegaLiteChartBuilder};

use super::AutoVegaWidget;

/// Type name under which `DataTable` formatters are registered.
pub const DATA_TABLE_TYPE_NAME: &str = "autovega::data::DataTable";

pub type DisplayFormatterFn = Rc<dyn Fn(&DataTable) -> AutoVegaResult<Renderable>>;

/// Host display environment that picks a formatter per value type.
///
/// Registration always goes through an explicit handle; there is no ambient
/// global environment.
pub trait DisplayEnvironment {
    /// Installs `formatter` for `type_name` and returns the one it replaced.
    fn set_formatter(
        &mut self,
        type_name: &str,
        formatter: DisplayFormatterFn,
    ) -> Option<DisplayFormatterFn>;

    fn formatter(&self, type_name: &str) -> Option<DisplayFormatterFn>;
}

/// In-memory display environment.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: IndexMap<String, DisplayFormatterFn>,
}

impl FormatterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats a table with the formatter registered for `DataTable`, if any.
    pub fn format_table(&self, table: &DataTable) -> Option<AutoVegaResult<Renderable>> {
        self.formatters
            .get(DATA_TABLE_TYPE_NAME)
            .map(|formatter| formatter(table))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("types", &self.formatters.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl DisplayEnvironment for FormatterRegistry {
    fn set_formatter(
        &mut self,
        type_name: &str,
        formatter: DisplayFormatterFn,
    ) -> Option<DisplayFormatterFn> {
        self.formatters.insert(type_name.to_owned(), formatter)
    }

    fn formatter(&self, type_name: &str) -> Option<DisplayFormatterFn> {
        self.formatters.get(type_name).cloned()
    }
}

/// Mounts an explorer widget over a copy of `table` and returns its current view.
pub fn display_table(table: &DataTable) -> AutoVegaResult<Renderable> {
    let chart_builder = VegaLiteChartBuilder::from_table(table);
    let widget = AutoVegaWidget::mount(table.clone(), chart_builder)?;
    Ok(widget.render())
}

/// Makes `display_table` the formatter for `DataTable` values in `env`.
///
/// Returns the previously registered formatter so hosts can restore it.
pub fn register_renderer<E>(env: &mut E) -> Option<DisplayFormatterFn>
where
    E: DisplayEnvironment + ?Sized,
{
    register_renderer_with(env, Rc::new(display_table))
}

/// Same as `register_renderer` with a caller-supplied formatter.
pub fn register_renderer_with<E>(
    env: &mut E,
    formatter: DisplayFormatterFn,
) -> Option<DisplayFormatterFn>
where
    E: DisplayEnvironment + ?Sized,
{
    let previous = env.set_formatter(DATA_TABLE_TYPE_NAME, formatter);
    debug!(
        type_name = DATA_TABLE_TYPE_NAME,
        replaced = previous.is_some(),
        "registered table renderer"
    );
    previous
}
