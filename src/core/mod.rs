pub mod channel;
pub mod chart_type;
pub mod column;
pub mod encoding;

pub use channel::Channel;
pub use chart_type::{ChartType, MarkKind};
pub use column::{Column, ColumnCatalog};
pub use encoding::{Encoding, guess_initial_encoding};
