pub mod field_type;
pub mod catalog;
pub mod error;

// Re-export commonly used types
pub use field_type::{BaseType, CustomName, FieldType, Plurality};
pub use catalog::{Direction, NodeTemplate, PortRef, TypeCatalog};
pub use error::CoreError;
