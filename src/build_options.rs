use serde::{Deserialize, Serialize};
use crate::string_set::StringSet;

/// Packaging-time build configuration for the module's rpms.
///
/// The macro text is opaque; nothing here checks its syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BuildOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rpm_macros: Option<String>,
    #[serde(default, skip_serializing_if = "StringSet::is_empty")]
    rpm_whitelist: StringSet,
}

impl BuildOptions {
    pub fn new(rpm_macros: Option<String>, rpm_whitelist: StringSet) -> Self {
        Self {
            rpm_macros,
            rpm_whitelist,
        }
    }

    pub fn rpm_macros(&self) -> Option<&str> {
        self.rpm_macros.as_deref()
    }

    /// Borrowed view of the whitelist; clone it to keep a copy.
    pub fn rpm_whitelist(&self) -> &StringSet {
        &self.rpm_whitelist
    }

    pub fn set_rpm_macros(&mut self, rpm_macros: Option<String>) {
        self.rpm_macros = rpm_macros;
    }

    pub fn set_rpm_whitelist(&mut self, rpm_whitelist: StringSet) {
        self.rpm_whitelist = rpm_whitelist;
    }

    pub fn with_rpm_macros(mut self, rpm_macros: impl Into<String>) -> Self {
        self.rpm_macros = Some(rpm_macros.into());
        self
    }

    pub fn with_whitelisted(mut self, target: impl Into<String>) -> Self {
        self.rpm_whitelist.add(target);
        self
    }
}
