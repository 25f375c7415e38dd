use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use crate::{
    build_options::BuildOptions,
    components::{ModuleComponent, Profile, RpmComponent, ServiceLevel},
    dependencies::{Dependencies, ModuleStreamMap},
    string_set::StringSet,
};

/// Stable symbolic names of every document field.
pub mod names {
    pub const MDVERSION: &str = "mdversion";
    pub const NAME: &str = "name";
    pub const STREAM: &str = "stream";
    pub const VERSION: &str = "version";
    pub const CONTEXT: &str = "context";
    pub const ARCH: &str = "arch";
    pub const SUMMARY: &str = "summary";
    pub const DESCRIPTION: &str = "description";
    pub const MODULE_LICENSES: &str = "module-licenses";
    pub const CONTENT_LICENSES: &str = "content-licenses";
    pub const COMMUNITY: &str = "community";
    pub const DOCUMENTATION: &str = "documentation";
    pub const TRACKER: &str = "tracker";
    pub const PROFILES: &str = "profiles";
    pub const RPM_API: &str = "rpm-api";
    pub const RPM_FILTER: &str = "rpm-filter";
    pub const RPM_ARTIFACTS: &str = "rpm-artifacts";
    pub const RPM_COMPONENTS: &str = "rpm-components";
    pub const MODULE_COMPONENTS: &str = "module-components";
    pub const SERVICELEVELS: &str = "servicelevels";
    pub const XMD: &str = "xmd";
    pub const BUILDOPTS: &str = "buildopts";
    pub const BUILDREQUIRES: &str = "buildrequires";
    pub const REQUIRES: &str = "requires";
    pub const EOL: &str = "eol";
    pub const DEPENDENCIES: &str = "dependencies";
}

/// Fields every schema version carries.
pub const COMMON_FIELDS: &[&str] = &[
    names::MDVERSION,
    names::NAME,
    names::STREAM,
    names::VERSION,
    names::CONTEXT,
    names::ARCH,
    names::SUMMARY,
    names::DESCRIPTION,
    names::MODULE_LICENSES,
    names::CONTENT_LICENSES,
    names::COMMUNITY,
    names::DOCUMENTATION,
    names::TRACKER,
    names::PROFILES,
    names::RPM_API,
    names::RPM_FILTER,
    names::RPM_ARTIFACTS,
    names::RPM_COMPONENTS,
    names::MODULE_COMPONENTS,
    names::SERVICELEVELS,
    names::XMD,
    names::BUILDOPTS,
];

pub const VERSION_ONE_FIELDS: &[&str] = &[names::BUILDREQUIRES, names::REQUIRES, names::EOL];

pub const EXTENDED_FIELDS: &[&str] = &[names::DEPENDENCIES];

/// Which schema versions define a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldScope {
    Common,
    VersionOne,
    Extended,
}

/// The type carried by a field, used to reject mistyped generic writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Unsigned,
    Text,
    Set,
    Profiles,
    RpmComponents,
    ModuleComponents,
    ServiceLevels,
    Xmd,
    BuildOptions,
    StreamMap,
    Date,
    Dependencies,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Unsigned => "unsigned integer",
            FieldKind::Text => "text",
            FieldKind::Set => "string set",
            FieldKind::Profiles => "profiles",
            FieldKind::RpmComponents => "rpm components",
            FieldKind::ModuleComponents => "module components",
            FieldKind::ServiceLevels => "service levels",
            FieldKind::Xmd => "xmd",
            FieldKind::BuildOptions => "build options",
            FieldKind::StreamMap => "module stream map",
            FieldKind::Date => "date",
            FieldKind::Dependencies => "dependencies",
        };
        f.write_str(name)
    }
}

/// Owned value of a single document field, as exchanged with generic tooling.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Unsigned(u64),
    Text(Option<String>),
    Set(StringSet),
    Profiles(BTreeMap<String, Profile>),
    RpmComponents(BTreeMap<String, RpmComponent>),
    ModuleComponents(BTreeMap<String, ModuleComponent>),
    ServiceLevels(BTreeMap<String, ServiceLevel>),
    Xmd(Option<serde_yaml::Value>),
    BuildOptions(Option<BuildOptions>),
    StreamMap(ModuleStreamMap),
    Date(Option<NaiveDate>),
    Dependencies(Vec<Dependencies>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Unsigned(_) => FieldKind::Unsigned,
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Set(_) => FieldKind::Set,
            FieldValue::Profiles(_) => FieldKind::Profiles,
            FieldValue::RpmComponents(_) => FieldKind::RpmComponents,
            FieldValue::ModuleComponents(_) => FieldKind::ModuleComponents,
            FieldValue::ServiceLevels(_) => FieldKind::ServiceLevels,
            FieldValue::Xmd(_) => FieldKind::Xmd,
            FieldValue::BuildOptions(_) => FieldKind::BuildOptions,
            FieldValue::StreamMap(_) => FieldKind::StreamMap,
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::Dependencies(_) => FieldKind::Dependencies,
        }
    }

    /// True when the value is the field's empty/default state.
    pub fn is_unset(&self) -> bool {
        match self {
            FieldValue::Unsigned(value) => *value == 0,
            FieldValue::Text(value) => value.is_none(),
            FieldValue::Set(value) => value.is_empty(),
            FieldValue::Profiles(value) => value.is_empty(),
            FieldValue::RpmComponents(value) => value.is_empty(),
            FieldValue::ModuleComponents(value) => value.is_empty(),
            FieldValue::ServiceLevels(value) => value.is_empty(),
            FieldValue::Xmd(value) => value.is_none(),
            FieldValue::BuildOptions(value) => value.is_none(),
            FieldValue::StreamMap(value) => value.is_empty(),
            FieldValue::Date(value) => value.is_none(),
            FieldValue::Dependencies(value) => value.is_empty(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field {field} expects {expected}, got {found}")]
    KindMismatch {
        field: String,
        expected: FieldKind,
        found: FieldKind,
    },
}
