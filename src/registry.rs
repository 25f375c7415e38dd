use std::collections::{BTreeMap, HashMap};
use crate::{
    field::{names, FieldError, FieldKind, FieldScope, FieldValue},
    legacy::LegacyDocument,
    stream::StreamDocument,
};

type LegacyReader = fn(&LegacyDocument) -> FieldValue;
type StreamReader = fn(&StreamDocument) -> FieldValue;
type StreamWriter = fn(&mut StreamDocument, FieldValue);

/// Typed accessor pair for one named field.
#[derive(Clone, Copy)]
pub struct FieldAccessor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub scope: FieldScope,
    read_legacy: LegacyReader,
    read_stream: StreamReader,
    write_stream: StreamWriter,
}

impl std::fmt::Debug for FieldAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Lookup of document fields by their stable symbolic name.
///
/// Meant for generic tooling that enumerates or checks fields without
/// per-field code. Regular callers use the typed accessors on the documents.
pub struct FieldRegistry {
    accessors: HashMap<&'static str, FieldAccessor>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        let accessors = accessor_table()
            .into_iter()
            .map(|accessor| (accessor.name, accessor))
            .collect();
        Self { accessors }
    }

    pub fn accessor(&self, name: &str) -> Result<&FieldAccessor, FieldError> {
        self.accessors
            .get(name)
            .ok_or_else(|| FieldError::UnknownField(name.to_string()))
    }

    /// All field names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.accessors.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn scope(&self, name: &str) -> Option<FieldScope> {
        self.accessors.get(name).map(|accessor| accessor.scope)
    }

    pub fn kind(&self, name: &str) -> Option<FieldKind> {
        self.accessors.get(name).map(|accessor| accessor.kind)
    }

    /// Names of the fields in `scope`, sorted.
    pub fn names_in_scope(&self, scope: FieldScope) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .accessors
            .values()
            .filter(|accessor| accessor.scope == scope)
            .map(|accessor| accessor.name)
            .collect();
        names.sort_unstable();
        names
    }

    pub fn get_legacy(&self, document: &LegacyDocument, name: &str) -> Result<FieldValue, FieldError> {
        let accessor = self.accessor(name)?;
        Ok((accessor.read_legacy)(document))
    }

    pub fn get_stream(&self, document: &StreamDocument, name: &str) -> Result<FieldValue, FieldError> {
        let accessor = self.accessor(name)?;
        Ok((accessor.read_stream)(document))
    }

    /// Write `value` into the named field of `document`.
    ///
    /// The value's kind must match the field's; nothing else is checked.
    pub fn set_stream(
        &self,
        document: &mut StreamDocument,
        name: &str,
        value: FieldValue,
    ) -> Result<(), FieldError> {
        let accessor = self.accessor(name)?;
        if value.kind() != accessor.kind {
            return Err(FieldError::KindMismatch {
                field: name.to_string(),
                expected: accessor.kind,
                found: value.kind(),
            });
        }
        (accessor.write_stream)(document, value);
        Ok(())
    }

    /// Owned copy of every field of `document`, keyed by name.
    pub fn snapshot_stream(&self, document: &StreamDocument) -> BTreeMap<&'static str, FieldValue> {
        self.accessors
            .values()
            .map(|accessor| (accessor.name, (accessor.read_stream)(document)))
            .collect()
    }

    pub fn snapshot_legacy(&self, document: &LegacyDocument) -> BTreeMap<&'static str, FieldValue> {
        self.accessors
            .values()
            .map(|accessor| (accessor.name, (accessor.read_legacy)(document)))
            .collect()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_owned)
}

fn accessor_table() -> Vec<FieldAccessor> {
    use FieldKind as K;
    use FieldScope::{Common, Extended, VersionOne};

    vec![
        FieldAccessor {
            name: names::MDVERSION,
            kind: K::Unsigned,
            scope: Common,
            read_legacy: |d| FieldValue::Unsigned(d.mdversion()),
            read_stream: |d| FieldValue::Unsigned(d.mdversion()),
            write_stream: |d, v| {
                if let FieldValue::Unsigned(v) = v {
                    d.set_mdversion(v)
                }
            },
        },
        FieldAccessor {
            name: names::NAME,
            kind: K::Text,
            scope: Common,
            read_legacy: |d| FieldValue::Text(owned(d.name())),
            read_stream: |d| FieldValue::Text(owned(d.name())),
            write_stream: |d, v| {
                if let FieldValue::Text(v) = v {
                    d.set_name(v)
                }
            },
        },
        FieldAccessor {
            name: names::STREAM,
            kind: K::Text,
            scope: Common,
            read_legacy: |d| FieldValue::Text(owned(d.stream())),
            read_stream: |d| FieldValue::Text(owned(d.stream())),
            write_stream: |d, v| {
                if let FieldValue::Text(v) = v {
                    d.set_stream(v)
                }
            },
        },
        FieldAccessor {
            name: names::VERSION,
            kind: K::Unsigned,
            scope: Common,
            read_legacy: |d| FieldValue::Unsigned(d.version()),
            read_stream: |d| FieldValue::Unsigned(d.version()),
            write_stream: |d, v| {
                if let FieldValue::Unsigned(v) = v {
                    d.set_version(v)
                }
            },
        },
        FieldAccessor {
            name: names::CONTEXT,
            kind: K::Text,
            scope: Common,
            read_legacy: |d| FieldValue::Text(owned(d.context())),
            read_stream: |d| FieldValue::Text(owned(d.context())),
            write_stream: |d, v| {
                if let FieldValue::Text(v) = v {
                    d.set_context(v)
                }
            },
        },
        FieldAccessor {
            name: names::ARCH,
            kind: K::Text,
            scope: Common,
            read_legacy: |d| FieldValue::Text(owned(d.arch())),
            read_stream: |d| FieldValue::Text(owned(d.arch())),
            write_stream: |d, v| {
                if let FieldValue::Text(v) = v {
                    d.set_arch(v)
                }
            },
        },
        FieldAccessor {
            name: names::SUMMARY,
            kind: K::Text,
            scope: Common,
            read_legacy: |d| FieldValue::Text(owned(d.summary())),
            read_stream: |d| FieldValue::Text(owned(d.summary())),
            write_stream: |d, v| {
                if let FieldValue::Text(v) = v {
                    d.set_summary(v)
                }
            },
        },
        FieldAccessor {
            name: names::DESCRIPTION,
            kind: K::Text,
            scope: Common,
            read_legacy: |d| FieldValue::Text(owned(d.description())),
            read_stream: |d| FieldValue::Text(owned(d.description())),
            write_stream: |d, v| {
                if let FieldValue::Text(v) = v {
                    d.set_description(v)
                }
            },
        },
        FieldAccessor {
            name: names::MODULE_LICENSES,
            kind: K::Set,
            scope: Common,
            read_legacy: |d| FieldValue::Set(d.module_licenses().clone()),
            read_stream: |d| FieldValue::Set(d.module_licenses().clone()),
            write_stream: |d, v| {
                if let FieldValue::Set(v) = v {
                    d.set_module_licenses(v)
                }
            },
        },
        FieldAccessor {
            name: names::CONTENT_LICENSES,
            kind: K::Set,
            scope: Common,
            read_legacy: |d| FieldValue::Set(d.content_licenses().clone()),
            read_stream: |d| FieldValue::Set(d.content_licenses().clone()),
            write_stream: |d, v| {
                if let FieldValue::Set(v) = v {
                    d.set_content_licenses(v)
                }
            },
        },
        FieldAccessor {
            name: names::COMMUNITY,
            kind: K::Text,
            scope: Common,
            read_legacy: |d| FieldValue::Text(owned(d.community())),
            read_stream: |d| FieldValue::Text(owned(d.community())),
            write_stream: |d, v| {
                if let FieldValue::Text(v) = v {
                    d.set_community(v)
                }
            },
        },
        FieldAccessor {
            name: names::DOCUMENTATION,
            kind: K::Text,
            scope: Common,
            read_legacy: |d| FieldValue::Text(owned(d.documentation())),
            read_stream: |d| FieldValue::Text(owned(d.documentation())),
            write_stream: |d, v| {
                if let FieldValue::Text(v) = v {
                    d.set_documentation(v)
                }
            },
        },
        FieldAccessor {
            name: names::TRACKER,
            kind: K::Text,
            scope: Common,
            read_legacy: |d| FieldValue::Text(owned(d.tracker())),
            read_stream: |d| FieldValue::Text(owned(d.tracker())),
            write_stream: |d, v| {
                if let FieldValue::Text(v) = v {
                    d.set_tracker(v)
                }
            },
        },
        FieldAccessor {
            name: names::PROFILES,
            kind: K::Profiles,
            scope: Common,
            read_legacy: |d| FieldValue::Profiles(d.profiles().clone()),
            read_stream: |d| FieldValue::Profiles(d.profiles().clone()),
            write_stream: |d, v| {
                if let FieldValue::Profiles(v) = v {
                    d.set_profiles(v)
                }
            },
        },
        FieldAccessor {
            name: names::RPM_API,
            kind: K::Set,
            scope: Common,
            read_legacy: |d| FieldValue::Set(d.rpm_api().clone()),
            read_stream: |d| FieldValue::Set(d.rpm_api().clone()),
            write_stream: |d, v| {
                if let FieldValue::Set(v) = v {
                    d.set_rpm_api(v)
                }
            },
        },
        FieldAccessor {
            name: names::RPM_FILTER,
            kind: K::Set,
            scope: Common,
            read_legacy: |d| FieldValue::Set(d.rpm_filter().clone()),
            read_stream: |d| FieldValue::Set(d.rpm_filter().clone()),
            write_stream: |d, v| {
                if let FieldValue::Set(v) = v {
                    d.set_rpm_filter(v)
                }
            },
        },
        FieldAccessor {
            name: names::RPM_ARTIFACTS,
            kind: K::Set,
            scope: Common,
            read_legacy: |d| FieldValue::Set(d.rpm_artifacts().clone()),
            read_stream: |d| FieldValue::Set(d.rpm_artifacts().clone()),
            write_stream: |d, v| {
                if let FieldValue::Set(v) = v {
                    d.set_rpm_artifacts(v)
                }
            },
        },
        FieldAccessor {
            name: names::RPM_COMPONENTS,
            kind: K::RpmComponents,
            scope: Common,
            read_legacy: |d| FieldValue::RpmComponents(d.rpm_components().clone()),
            read_stream: |d| FieldValue::RpmComponents(d.rpm_components().clone()),
            write_stream: |d, v| {
                if let FieldValue::RpmComponents(v) = v {
                    d.set_rpm_components(v)
                }
            },
        },
        FieldAccessor {
            name: names::MODULE_COMPONENTS,
            kind: K::ModuleComponents,
            scope: Common,
            read_legacy: |d| FieldValue::ModuleComponents(d.module_components().clone()),
            read_stream: |d| FieldValue::ModuleComponents(d.module_components().clone()),
            write_stream: |d, v| {
                if let FieldValue::ModuleComponents(v) = v {
                    d.set_module_components(v)
                }
            },
        },
        FieldAccessor {
            name: names::SERVICELEVELS,
            kind: K::ServiceLevels,
            scope: Common,
            read_legacy: |d| FieldValue::ServiceLevels(d.servicelevels().clone()),
            read_stream: |d| FieldValue::ServiceLevels(d.servicelevels().clone()),
            write_stream: |d, v| {
                if let FieldValue::ServiceLevels(v) = v {
                    d.set_servicelevels(v)
                }
            },
        },
        FieldAccessor {
            name: names::XMD,
            kind: K::Xmd,
            scope: Common,
            read_legacy: |d| FieldValue::Xmd(d.xmd().cloned()),
            read_stream: |d| FieldValue::Xmd(d.xmd().cloned()),
            write_stream: |d, v| {
                if let FieldValue::Xmd(v) = v {
                    d.set_xmd(v)
                }
            },
        },
        FieldAccessor {
            name: names::BUILDOPTS,
            kind: K::BuildOptions,
            scope: Common,
            read_legacy: |d| FieldValue::BuildOptions(d.buildopts().cloned()),
            read_stream: |d| FieldValue::BuildOptions(d.buildopts().cloned()),
            write_stream: |d, v| {
                if let FieldValue::BuildOptions(v) = v {
                    d.set_buildopts(v)
                }
            },
        },
        FieldAccessor {
            name: names::BUILDREQUIRES,
            kind: K::StreamMap,
            scope: VersionOne,
            read_legacy: |d| FieldValue::StreamMap(d.buildrequires().clone()),
            read_stream: |d| FieldValue::StreamMap(d.buildrequires().clone()),
            write_stream: |d, v| {
                if let FieldValue::StreamMap(v) = v {
                    d.set_buildrequires(v)
                }
            },
        },
        FieldAccessor {
            name: names::REQUIRES,
            kind: K::StreamMap,
            scope: VersionOne,
            read_legacy: |d| FieldValue::StreamMap(d.requires().clone()),
            read_stream: |d| FieldValue::StreamMap(d.requires().clone()),
            write_stream: |d, v| {
                if let FieldValue::StreamMap(v) = v {
                    d.set_requires(v)
                }
            },
        },
        FieldAccessor {
            name: names::EOL,
            kind: K::Date,
            scope: VersionOne,
            read_legacy: |d| FieldValue::Date(d.eol()),
            read_stream: |d| FieldValue::Date(d.eol()),
            write_stream: |d, v| {
                if let FieldValue::Date(v) = v {
                    d.set_eol(v)
                }
            },
        },
        FieldAccessor {
            name: names::DEPENDENCIES,
            kind: K::Dependencies,
            scope: Extended,
            read_legacy: |d| FieldValue::Dependencies(d.dependencies().to_vec()),
            read_stream: |d| FieldValue::Dependencies(d.dependencies().to_vec()),
            write_stream: |d, v| {
                if let FieldValue::Dependencies(v) = v {
                    d.set_dependencies(v)
                }
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        field::{COMMON_FIELDS, EXTENDED_FIELDS, VERSION_ONE_FIELDS},
        string_set::StringSet,
    };

    #[test]
    fn test_registry_covers_every_field() {
        let registry = FieldRegistry::new();
        let mut expected: Vec<&str> = COMMON_FIELDS
            .iter()
            .chain(VERSION_ONE_FIELDS)
            .chain(EXTENDED_FIELDS)
            .copied()
            .collect();
        expected.sort_unstable();

        assert_eq!(registry.names(), expected);
    }

    #[test]
    fn test_scopes_match_field_lists() {
        let registry = FieldRegistry::new();
        let mut version_one = VERSION_ONE_FIELDS.to_vec();
        version_one.sort_unstable();

        assert_eq!(registry.names_in_scope(FieldScope::VersionOne), version_one);
        assert_eq!(registry.names_in_scope(FieldScope::Extended), vec!["dependencies"]);
        assert_eq!(registry.scope("rpm-api"), Some(FieldScope::Common));
        assert_eq!(registry.scope("nope"), None);
    }

    #[test]
    fn test_set_and_get_by_name() {
        let registry = FieldRegistry::new();
        let mut doc = StreamDocument::new();

        registry
            .set_stream(&mut doc, "name", FieldValue::Text(Some("foo".to_string())))
            .unwrap();
        registry
            .set_stream(&mut doc, "version", FieldValue::Unsigned(20160927144203))
            .unwrap();

        assert_eq!(doc.name(), Some("foo"));
        assert_eq!(
            registry.get_stream(&doc, "version").unwrap(),
            FieldValue::Unsigned(20160927144203)
        );
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let registry = FieldRegistry::new();
        let mut doc = StreamDocument::new();

        let result = registry.set_stream(&mut doc, "rpm-api", FieldValue::Text(Some("bar".to_string())));

        assert_eq!(
            result,
            Err(FieldError::KindMismatch {
                field: "rpm-api".to_string(),
                expected: FieldKind::Set,
                found: FieldKind::Text,
            })
        );
        assert!(doc.rpm_api().is_empty());
    }

    #[test]
    fn test_unknown_field() {
        let registry = FieldRegistry::new();
        let doc = StreamDocument::new();

        assert_eq!(
            registry.get_stream(&doc, "license"),
            Err(FieldError::UnknownField("license".to_string()))
        );
    }

    #[test]
    fn test_legacy_reader() {
        let registry = FieldRegistry::new();
        let mut doc = LegacyDocument::new(1);
        doc.set_content_licenses(["zlib"].into_iter().collect());

        let value = registry.get_legacy(&doc, "content-licenses").unwrap();
        assert_eq!(value, FieldValue::Set(["zlib"].into_iter().collect::<StringSet>()));
        assert!(registry.get_legacy(&doc, "eol").unwrap().is_unset());
    }

    #[test]
    fn test_snapshot_of_empty_document_is_all_unset() {
        let registry = FieldRegistry::new();
        let snapshot = registry.snapshot_stream(&StreamDocument::new());

        assert_eq!(snapshot.len(), registry.names().len());
        for (name, value) in snapshot {
            assert!(value.is_unset(), "{name} should start unset");
        }
    }
}
