use serde::{Deserialize, Serialize};
use crate::{
    converter::{ConversionSummary, ConversionWarning, ConversionWarningType},
    mdversion::MdVersion,
    validation::ValidationReport,
};

/// Renders conversion outcomes for people and tooling.
pub struct ConversionReporter {
    output_format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Console,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub source_version: MdVersion,
    pub copied_fields: Vec<&'static str>,
    pub unset_fields: Vec<&'static str>,
    pub warnings: Vec<ConversionWarning>,
    pub validation_summary: Option<ValidationSummary>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total_errors: usize,
    pub total_warnings: usize,
    pub missing_required_fields: Vec<String>,
    pub is_valid: bool,
}

impl ConversionReporter {
    pub fn new() -> Self {
        Self {
            output_format: ReportFormat::Console,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn generate_report(
        &self,
        summary: ConversionSummary,
        validation_report: Option<&ValidationReport>,
    ) -> ConversionReport {
        let validation_summary = validation_report.map(create_validation_summary);
        let recommendations = generate_recommendations(&summary, validation_report);

        ConversionReport {
            source_version: summary.source_version,
            copied_fields: summary.copied_fields,
            unset_fields: summary.unset_fields,
            warnings: summary.warnings,
            validation_summary,
            recommendations,
        }
    }

    pub fn format_report(&self, report: &ConversionReport) -> Result<String, ReportError> {
        match self.output_format {
            ReportFormat::Console => Ok(format_console_report(report)),
            ReportFormat::Json => serde_json::to_string_pretty(report)
                .map_err(|e| ReportError::Serialization(e.to_string())),
            ReportFormat::Yaml => serde_yaml::to_string(report)
                .map_err(|e| ReportError::Serialization(e.to_string())),
        }
    }
}

impl Default for ConversionReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn create_validation_summary(report: &ValidationReport) -> ValidationSummary {
    ValidationSummary {
        total_errors: report.errors.len(),
        total_warnings: report.warnings.len(),
        missing_required_fields: report
            .missing_required_fields()
            .into_iter()
            .map(str::to_owned)
            .collect(),
        is_valid: report.is_valid,
    }
}

fn generate_recommendations(
    summary: &ConversionSummary,
    validation_report: Option<&ValidationReport>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    let ignored = summary
        .warnings
        .iter()
        .any(|w| w.warning_type == ConversionWarningType::InapplicableFieldIgnored);
    if ignored {
        recommendations.push(format!(
            "Remove fields not defined for mdversion {} from the source document",
            summary.source_version
        ));
    }

    if let Some(report) = validation_report {
        if !report.missing_required_fields().is_empty() {
            recommendations.push("Add the missing required fields before publishing the stream".to_string());
        }
        for warning in &report.warnings {
            if let Some(ref recommendation) = warning.recommendation {
                recommendations.push(recommendation.clone());
            }
        }
    }

    if recommendations.is_empty() {
        recommendations.push("Conversion completed successfully".to_string());
    }

    recommendations
}

fn format_console_report(report: &ConversionReport) -> String {
    let mut output = String::new();

    output.push_str("=== Module Stream Conversion Report ===\n\n");
    output.push_str(&format!("Source mdversion: {}\n", report.source_version));
    output.push_str(&format!("Fields copied: {}\n", report.copied_fields.len()));
    if !report.unset_fields.is_empty() {
        output.push_str(&format!("Left unset: {}\n", report.unset_fields.join(", ")));
    }

    if let Some(ref validation) = report.validation_summary {
        output.push_str(&format!(
            "Validation Status: {}\n",
            if validation.is_valid { "VALID" } else { "INVALID" }
        ));
    }

    if !report.warnings.is_empty() {
        output.push_str("\nWarnings:\n");
        for warning in &report.warnings {
            output.push_str(&format!("  ! {}\n", warning.message));
        }
    }

    if !report.recommendations.is_empty() {
        output.push_str("\nRecommendations:\n");
        for rec in &report.recommendations {
            output.push_str(&format!("  • {}\n", rec));
        }
    }

    output
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        converter::convert,
        legacy::LegacyDocument,
        stream::StreamDocument,
        validation::validate,
    };

    fn converted(mdversion: u64) -> (StreamDocument, ConversionSummary) {
        let mut source = LegacyDocument::new(mdversion);
        source.set_summary("An example module");
        source.set_module_licenses(["MIT"].into_iter().collect());
        let mut dest = StreamDocument::new();
        let summary = convert(&source, &mut dest).unwrap();
        (dest, summary)
    }

    #[test]
    fn test_reporter_with_format() {
        let reporter = ConversionReporter::new();
        assert_eq!(reporter.output_format, ReportFormat::Console);
        let reporter = reporter.with_format(ReportFormat::Json);
        assert_eq!(reporter.output_format, ReportFormat::Json);
    }

    #[test]
    fn test_generate_report_with_validation() {
        let (doc, summary) = converted(2);
        let validation = validate(&doc);
        let report = ConversionReporter::new().generate_report(summary, Some(&validation));

        assert_eq!(report.source_version, MdVersion::V2);
        let validation_summary = report.validation_summary.unwrap();
        assert!(!validation_summary.is_valid);
        assert_eq!(validation_summary.missing_required_fields, vec!["description"]);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("missing required fields")));
    }

    #[test]
    fn test_format_console_report() {
        let (_, summary) = converted(1);
        let reporter = ConversionReporter::new();
        let report = reporter.generate_report(summary, None);
        let formatted = reporter.format_report(&report).unwrap();

        assert!(formatted.contains("Module Stream Conversion Report"));
        assert!(formatted.contains("Source mdversion: 1"));
        assert!(formatted.contains("Left unset: eol, dependencies"));
        assert!(formatted.contains("no end-of-life date"));
    }

    #[test]
    fn test_format_json_report() {
        let (_, summary) = converted(2);
        let reporter = ConversionReporter::new().with_format(ReportFormat::Json);
        let report = reporter.generate_report(summary, None);
        let formatted = reporter.format_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(value["source_version"], 2);
        assert_eq!(value["recommendations"][0], "Conversion completed successfully");
        assert!(value["copied_fields"]
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f == "dependencies"));
    }

    #[test]
    fn test_format_yaml_report() {
        let (_, summary) = converted(2);
        let reporter = ConversionReporter::new().with_format(ReportFormat::Yaml);
        let report = reporter.generate_report(summary, None);
        let formatted = reporter.format_report(&report).unwrap();

        assert!(formatted.contains("source_version: 2"));
        assert!(formatted.contains("- buildrequires"));
    }
}
