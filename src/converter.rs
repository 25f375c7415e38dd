use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace, warn};
use crate::{
    field::{names, COMMON_FIELDS, EXTENDED_FIELDS, VERSION_ONE_FIELDS},
    legacy::LegacyDocument,
    mdversion::{MdVersion, MdVersionError},
    stream::StreamDocument,
};

/// What a conversion copied and what it deliberately left unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionSummary {
    pub source_version: MdVersion,
    pub copied_fields: Vec<&'static str>,
    pub unset_fields: Vec<&'static str>,
    pub warnings: Vec<ConversionWarning>,
}

/// Non-fatal observation made while converting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionWarning {
    pub message: String,
    pub field: Option<&'static str>,
    pub warning_type: ConversionWarningType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConversionWarningType {
    /// The source carries data for a field its version does not define.
    InapplicableFieldIgnored,
    /// A version 1 document without an end-of-life date.
    EolAbsent,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Cannot convert version-specific fields: {0}")]
    Version(#[from] MdVersionError),
}

impl ConversionWarning {
    pub fn new(message: String, warning_type: ConversionWarningType) -> Self {
        Self {
            message,
            field: None,
            warning_type,
        }
    }

    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }
}

/// Populate `destination` from `source`.
///
/// Every field common to all schema versions is copied. A version 1 source
/// then contributes `buildrequires`, `requires` and, when present, `eol`;
/// any later version contributes `dependencies`. Fields outside the source's
/// version stay at their empty state in `destination`.
///
/// `destination` is expected to be freshly constructed: values are assigned,
/// not merged. The common fields are written for every source. When the
/// source's mdversion is neither 1 nor 2 or later, no version-specific field
/// is written and the version error is returned after the common copy.
pub fn convert(
    source: &LegacyDocument,
    destination: &mut StreamDocument,
) -> Result<ConversionSummary, ConversionError> {
    debug!(
        mdversion = source.mdversion(),
        name = source.name().unwrap_or("<unnamed>"),
        stream = source.stream().unwrap_or("<none>"),
        "converting legacy module document"
    );

    copy_common_fields(source, destination);

    let version = source.schema_version().map_err(|err| {
        warn!(
            mdversion = source.mdversion(),
            "copied common fields only: {}", err
        );
        ConversionError::from(err)
    })?;

    let mut copied_fields = COMMON_FIELDS.to_vec();
    let mut unset_fields = Vec::new();
    let mut warnings = Vec::new();

    match version {
        MdVersion::One => {
            trace!("copying version 1 requirements");
            destination.set_buildrequires(source.buildrequires().clone());
            destination.set_requires(source.requires().clone());
            copied_fields.push(names::BUILDREQUIRES);
            copied_fields.push(names::REQUIRES);

            match source.eol() {
                Some(eol) => {
                    destination.set_eol(Some(eol));
                    copied_fields.push(names::EOL);
                }
                None => {
                    unset_fields.push(names::EOL);
                    warnings.push(
                        ConversionWarning::new(
                            "Version 1 document has no end-of-life date".to_string(),
                            ConversionWarningType::EolAbsent,
                        )
                        .with_field(names::EOL),
                    );
                }
            }

            unset_fields.extend_from_slice(EXTENDED_FIELDS);
        }
        MdVersion::Extended(_) => {
            trace!(entries = source.dependencies().len(), "copying dependencies");
            destination.set_dependencies(source.dependencies().to_vec());
            copied_fields.push(names::DEPENDENCIES);

            unset_fields.extend_from_slice(VERSION_ONE_FIELDS);
        }
    }

    for field in source.inapplicable_fields() {
        warnings.push(inapplicable(field, version));
    }

    debug!(
        copied = copied_fields.len(),
        unset = unset_fields.len(),
        warnings = warnings.len(),
        "conversion complete"
    );

    Ok(ConversionSummary {
        source_version: version,
        copied_fields,
        unset_fields,
        warnings,
    })
}

fn copy_common_fields(source: &LegacyDocument, destination: &mut StreamDocument) {
    destination.set_mdversion(source.mdversion());
    destination.set_name(source.name().map(str::to_owned));
    destination.set_stream(source.stream().map(str::to_owned));
    destination.set_version(source.version());
    destination.set_context(source.context().map(str::to_owned));
    destination.set_arch(source.arch().map(str::to_owned));
    destination.set_summary(source.summary().map(str::to_owned));
    destination.set_description(source.description().map(str::to_owned));
    destination.set_module_licenses(source.module_licenses().clone());
    destination.set_content_licenses(source.content_licenses().clone());
    destination.set_community(source.community().map(str::to_owned));
    destination.set_documentation(source.documentation().map(str::to_owned));
    destination.set_tracker(source.tracker().map(str::to_owned));
    destination.set_profiles(source.profiles().clone());
    destination.set_rpm_api(source.rpm_api().clone());
    destination.set_rpm_filter(source.rpm_filter().clone());
    destination.set_rpm_artifacts(source.rpm_artifacts().clone());
    destination.set_rpm_components(source.rpm_components().clone());
    destination.set_module_components(source.module_components().clone());
    destination.set_servicelevels(source.servicelevels().clone());
    destination.set_xmd(source.xmd().cloned());
    destination.set_buildopts(source.buildopts().cloned());
}

fn inapplicable(field: &'static str, version: MdVersion) -> ConversionWarning {
    ConversionWarning::new(
        format!("{} is not defined for mdversion {} and was not copied", field, version),
        ConversionWarningType::InapplicableFieldIgnored,
    )
    .with_field(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::{
        build_options::BuildOptions,
        dependencies::Dependencies,
        string_set::StringSet,
    };

    fn base_document(mdversion: u64) -> LegacyDocument {
        let mut doc = LegacyDocument::new(mdversion);
        doc.set_name("foo");
        doc.set_stream("stream-name");
        doc.set_version(20160927144203);
        doc.set_summary("An example module");
        doc.set_module_licenses(["MIT"].into_iter().collect());
        doc.set_buildopts(BuildOptions::new(
            Some("%demomacro 1\n".to_string()),
            ["xxx"].into_iter().collect(),
        ));
        doc
    }

    #[test]
    fn test_version_one_copies_requirements_and_eol() {
        let mut source = base_document(1);
        source.add_buildrequires("platform", "f28");
        source.add_requires("platform", "f28");
        source.set_eol(NaiveDate::from_ymd_opt(2077, 10, 23));

        let mut dest = StreamDocument::new();
        let summary = convert(&source, &mut dest).unwrap();

        assert_eq!(summary.source_version, MdVersion::One);
        assert_eq!(dest.buildrequires(), source.buildrequires());
        assert_eq!(dest.requires(), source.requires());
        assert_eq!(dest.eol(), NaiveDate::from_ymd_opt(2077, 10, 23));
        assert!(dest.dependencies().is_empty());
        assert!(summary.copied_fields.contains(&names::EOL));
        assert_eq!(summary.unset_fields, vec![names::DEPENDENCIES]);
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn test_version_one_without_eol_leaves_eol_unset() {
        let source = base_document(1);
        let mut dest = StreamDocument::new();
        let summary = convert(&source, &mut dest).unwrap();

        assert!(dest.eol().is_none());
        assert!(summary.unset_fields.contains(&names::EOL));
        assert_eq!(summary.warnings.len(), 1);
        assert_eq!(summary.warnings[0].warning_type, ConversionWarningType::EolAbsent);
    }

    #[test]
    fn test_version_two_copies_dependencies_only() {
        let mut source = base_document(2);
        let mut deps = Dependencies::new();
        deps.add_buildrequires("platform", ["-epel7", "-f27"]);
        deps.add_requires("platform", ["-epel7", "-f27"]);
        source.add_dependencies(deps);

        let mut dest = StreamDocument::new();
        let summary = convert(&source, &mut dest).unwrap();

        assert_eq!(summary.source_version, MdVersion::V2);
        assert_eq!(dest.dependencies(), source.dependencies());
        assert!(dest.buildrequires().is_empty());
        assert!(dest.requires().is_empty());
        assert!(dest.eol().is_none());
        assert_eq!(summary.unset_fields, VERSION_ONE_FIELDS.to_vec());
    }

    #[test]
    fn test_later_versions_behave_like_two() {
        let mut source = base_document(3);
        source.add_dependencies(Dependencies::new());

        let dest = StreamDocument::from_legacy(&source).unwrap();
        assert_eq!(dest.mdversion(), 3);
        assert_eq!(dest.dependencies().len(), 1);
    }

    #[test]
    fn test_inapplicable_source_data_is_not_copied() {
        let mut source = base_document(2);
        source.add_buildrequires("platform", "f28");
        source.set_eol(NaiveDate::from_ymd_opt(2030, 1, 1));

        let mut dest = StreamDocument::new();
        let summary = convert(&source, &mut dest).unwrap();

        assert!(dest.buildrequires().is_empty());
        assert!(dest.eol().is_none());
        let ignored: Vec<_> = summary
            .warnings
            .iter()
            .filter(|w| w.warning_type == ConversionWarningType::InapplicableFieldIgnored)
            .filter_map(|w| w.field)
            .collect();
        assert_eq!(ignored, vec![names::BUILDREQUIRES, names::EOL]);
    }

    #[test]
    fn test_version_zero_copies_common_fields_only() {
        let mut source = base_document(0);
        source.add_dependencies(Dependencies::new());
        source.add_buildrequires("platform", "f28");
        source.add_requires("platform", "f28");
        source.set_eol(NaiveDate::from_ymd_opt(2077, 10, 23));

        let mut dest = StreamDocument::new();
        let result = convert(&source, &mut dest);

        assert_eq!(
            result,
            Err(ConversionError::Version(MdVersionError::Unsupported(0)))
        );
        assert_eq!(dest.mdversion(), 0);
        assert_eq!(dest.name(), Some("foo"));
        assert_eq!(dest.stream(), Some("stream-name"));
        assert_eq!(dest.version(), 20160927144203);
        assert_eq!(dest.summary(), Some("An example module"));
        assert!(dest.module_licenses().contains("MIT"));
        assert_eq!(dest.buildopts(), source.buildopts());
        assert!(dest.buildrequires().is_empty());
        assert!(dest.requires().is_empty());
        assert!(dest.eol().is_none());
        assert!(dest.dependencies().is_empty());
    }

    #[test]
    fn test_version_error_message_names_mdversion() {
        let err = ConversionError::from(MdVersionError::Unsupported(0));
        assert_eq!(
            err.to_string(),
            "Cannot convert version-specific fields: Unsupported mdversion: 0"
        );

        let err = ConversionError::from(MdVersionError::InvalidFormat("two".to_string()));
        assert_eq!(
            err,
            ConversionError::Version(MdVersionError::InvalidFormat("two".to_string()))
        );
    }

    #[test]
    fn test_common_fields_copied() {
        let mut source = base_document(2);
        source.set_context("c0ffee43");
        source.set_arch("x86_64");
        source.set_tracker("http://www.example.com/");
        source.set_rpm_filter(["baz-nonfoo"].into_iter().collect::<StringSet>());
        source.set_xmd(serde_yaml::from_str("some_key: some_data").unwrap());

        let dest = StreamDocument::from_legacy(&source).unwrap();

        assert_eq!(dest.name(), Some("foo"));
        assert_eq!(dest.stream(), Some("stream-name"));
        assert_eq!(dest.version(), 20160927144203);
        assert_eq!(dest.context(), Some("c0ffee43"));
        assert_eq!(dest.arch(), Some("x86_64"));
        assert_eq!(dest.summary(), Some("An example module"));
        assert!(dest.description().is_none());
        assert_eq!(dest.tracker(), Some("http://www.example.com/"));
        assert!(dest.rpm_filter().contains("baz-nonfoo"));
        assert_eq!(dest.buildopts(), source.buildopts());
        assert_eq!(dest.xmd(), source.xmd());
    }

    #[test]
    fn test_warning_with_field() {
        let warning = ConversionWarning::new(
            "Test warning".to_string(),
            ConversionWarningType::InapplicableFieldIgnored,
        )
        .with_field(names::EOL);

        assert_eq!(warning.message, "Test warning");
        assert_eq!(warning.field, Some("eol"));
    }
}
