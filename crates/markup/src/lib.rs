pub mod attrs;
pub mod element;

// Re-exports
pub use attrs::Attributes;
pub use element::{escape_attr, Element};
pub use plcl_core::{ClassList, StyleConfig};
