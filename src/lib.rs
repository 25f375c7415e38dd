// Module metadata documents and legacy to module-stream conversion
pub mod string_set;
pub mod build_options;
pub mod dependencies;
pub mod components;
pub mod mdversion;
pub mod legacy;
pub mod stream;
pub mod field;
pub mod registry;
pub mod converter;
pub mod validation;
pub mod reporter;

// Re-export core types for convenience
pub use string_set::StringSet;
pub use build_options::BuildOptions;
pub use dependencies::{Dependencies, ModuleStreamMap};
pub use components::{ModuleComponent, Profile, RpmComponent, ServiceLevel};
pub use mdversion::{ExtendedVersion, MdVersion, MdVersionError};
pub use legacy::LegacyDocument;
pub use stream::StreamDocument;
pub use field::{FieldError, FieldKind, FieldScope, FieldValue};
pub use registry::FieldRegistry;
pub use converter::{
    convert, ConversionError, ConversionSummary, ConversionWarning, ConversionWarningType,
};
pub use validation::{validate, ValidationReport};
pub use reporter::{ConversionReport, ConversionReporter, ReportError, ReportFormat};
