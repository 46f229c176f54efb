pub mod error;
pub mod merge;
pub mod props;
pub mod scale;
pub mod styling;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use merge::compose_classes;
pub use props::{load_from_json, LoadedStyle, RawStyleProps};
pub use styling::{gap_class, resolve};
pub use types::{
    ClassList, Diagnostic, DiagnosticLevel, Radius, Shadow, Size, Spacing, StyleConfig,
    Unresolved, Variant,
};
