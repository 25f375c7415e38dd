use serde::{Deserialize, Serialize};
use crate::{
    field::names,
    mdversion::MdVersion,
    stream::StreamDocument,
};

/// Outcome of checking a populated stream document for completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn missing_required_fields(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| matches!(e.error_type, ValidationErrorType::MissingRequiredField))
            .map(|e| e.field.as_str())
            .collect()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub error_type: ValidationErrorType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorType {
    MissingRequiredField,
    UnsupportedVersion,
    /// Data present for a field the document's version does not define.
    VersionMismatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub field: String,
    pub warning_type: ValidationWarningType,
    pub message: String,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationWarningType {
    DeprecatedField,
    MissingOptionalField,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, error_type: ValidationErrorType, message: String) -> Self {
        Self {
            field: field.into(),
            error_type,
            message,
        }
    }
}

impl ValidationWarning {
    pub fn new(field: impl Into<String>, warning_type: ValidationWarningType, message: String) -> Self {
        Self {
            field: field.into(),
            warning_type,
            message,
            recommendation: None,
        }
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// Check that `document` carries what its mdversion requires and nothing
/// its mdversion does not define.
///
/// Never called by the converter or the setters.
pub fn validate(document: &StreamDocument) -> ValidationReport {
    let mut report = ValidationReport::new();

    let version = match MdVersion::new(document.mdversion()) {
        Ok(version) => Some(version),
        Err(err) => {
            report.add_error(ValidationError::new(
                names::MDVERSION,
                ValidationErrorType::UnsupportedVersion,
                err.to_string(),
            ));
            None
        }
    };

    if document.summary().is_none() {
        report.add_error(missing(names::SUMMARY));
    }
    if document.description().is_none() {
        report.add_error(missing(names::DESCRIPTION));
    }
    if document.module_licenses().is_empty() {
        report.add_error(missing(names::MODULE_LICENSES));
    }

    match version {
        Some(MdVersion::One) => {
            if !document.dependencies().is_empty() {
                report.add_error(mismatch(names::DEPENDENCIES, MdVersion::One));
            }
            if document.eol().is_some() {
                report.add_warning(
                    ValidationWarning::new(
                        names::EOL,
                        ValidationWarningType::DeprecatedField,
                        "eol is deprecated".to_string(),
                    )
                    .with_recommendation("Express end of life through servicelevels"),
                );
            }
        }
        Some(version @ MdVersion::Extended(_)) => {
            if !document.buildrequires().is_empty() {
                report.add_error(mismatch(names::BUILDREQUIRES, version));
            }
            if !document.requires().is_empty() {
                report.add_error(mismatch(names::REQUIRES, version));
            }
            if document.eol().is_some() {
                report.add_error(mismatch(names::EOL, version));
            }
        }
        None => {}
    }

    if document.rpm_api().is_empty() {
        report.add_warning(
            ValidationWarning::new(
                names::RPM_API,
                ValidationWarningType::MissingOptionalField,
                "No rpms are declared as public API".to_string(),
            )
            .with_recommendation("List the rpms consumers may rely on under rpm-api"),
        );
    }

    report
}

fn missing(field: &str) -> ValidationError {
    ValidationError::new(
        field,
        ValidationErrorType::MissingRequiredField,
        format!("{} is required", field),
    )
}

fn mismatch(field: &str, version: MdVersion) -> ValidationError {
    ValidationError::new(
        field,
        ValidationErrorType::VersionMismatch,
        format!("{} is not defined for mdversion {}", field, version),
    )
}
