//! Dataset collaborator contract and the in-memory table shipped with the crate.

mod table;

pub use table::DataTable;

use crate::render::Renderable;

/// Contract implemented by any tabular dataset a widget can explore.
///
/// Widgets only ever read column names (once, at mount) and the table
/// representation (on every table redraw).
pub trait Dataset {
    fn columns(&self) -> Vec<String>;
    fn table_representation(&self) -> Renderable;
}

impl<T: Dataset + ?Sized> Dataset for &T {
    fn columns(&self) -> Vec<String> {
        (**self).columns()
    }

    fn table_representation(&self) -> Renderable {
        (**self).table_representation()
    }
}
