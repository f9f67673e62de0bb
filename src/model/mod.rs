//! Generic record model shared by every entity table.

pub mod entity_kind;
pub mod record;
pub mod value;

pub use entity_kind::EntityKind;
pub use record::{Record, RecordError, Row, ID_FIELD};
pub use value::Value;
