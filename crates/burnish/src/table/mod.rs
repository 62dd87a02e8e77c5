//! Record and table types for untyped tabular product data.

mod record;
mod table;
mod value;

pub use record::Record;
pub use table::Table;
pub use value::FieldValue;
