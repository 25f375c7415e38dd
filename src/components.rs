//! Structures carried through conversion untouched: component lists,
//! installation profiles and service levels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::string_set::StringSet;

/// An rpm package built as part of the module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RpmComponent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub buildorder: i64,
    #[serde(default, skip_serializing_if = "StringSet::is_empty")]
    pub arches: StringSet,
    #[serde(default, skip_serializing_if = "StringSet::is_empty")]
    pub multilib: StringSet,
}

impl RpmComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    pub fn with_buildorder(mut self, buildorder: i64) -> Self {
        self.buildorder = buildorder;
        self
    }
}

/// Another module bundled into this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleComponent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub buildorder: i64,
}

impl ModuleComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }
}

/// Named set of rpms installed together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "StringSet::is_empty")]
    pub rpms: StringSet,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_rpm(mut self, rpm: impl Into<String>) -> Self {
        self.rpms.add(rpm);
        self
    }
}

/// Support commitment for the stream, optionally ending on a given date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLevel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eol: Option<NaiveDate>,
}

impl ServiceLevel {
    pub fn new(name: impl Into<String>, eol: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            eol,
        }
    }
}
