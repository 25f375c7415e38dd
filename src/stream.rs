use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::{
    build_options::BuildOptions,
    components::{ModuleComponent, Profile, RpmComponent, ServiceLevel},
    converter::{self, ConversionError},
    dependencies::{Dependencies, ModuleStreamMap},
    legacy::LegacyDocument,
    string_set::StringSet,
};

/// Unified module stream document.
///
/// Holds every field any schema version can carry. Starts empty; each
/// setter takes ownership of its value, so a populated document never
/// refers back to whatever it was filled from. Setters accept any value of
/// the right type without validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StreamDocument {
    mdversion: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<String>,
    version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    module_licenses: StringSet,
    content_licenses: StringSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    community: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tracker: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    profiles: BTreeMap<String, Profile>,
    rpm_api: StringSet,
    rpm_filter: StringSet,
    rpm_artifacts: StringSet,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    rpm_components: BTreeMap<String, RpmComponent>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    module_components: BTreeMap<String, ModuleComponent>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    servicelevels: BTreeMap<String, ServiceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xmd: Option<serde_yaml::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    buildopts: Option<BuildOptions>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    buildrequires: ModuleStreamMap,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    requires: ModuleStreamMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    eol: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<Dependencies>,
}

impl StreamDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `source` into a freshly constructed stream document.
    pub fn from_legacy(source: &LegacyDocument) -> Result<Self, ConversionError> {
        let mut document = Self::new();
        converter::convert(source, &mut document)?;
        Ok(document)
    }

    pub fn mdversion(&self) -> u64 {
        self.mdversion
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn stream(&self) -> Option<&str> {
        self.stream.as_deref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn arch(&self) -> Option<&str> {
        self.arch.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn module_licenses(&self) -> &StringSet {
        &self.module_licenses
    }

    pub fn content_licenses(&self) -> &StringSet {
        &self.content_licenses
    }

    pub fn community(&self) -> Option<&str> {
        self.community.as_deref()
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn tracker(&self) -> Option<&str> {
        self.tracker.as_deref()
    }

    pub fn profiles(&self) -> &BTreeMap<String, Profile> {
        &self.profiles
    }

    pub fn rpm_api(&self) -> &StringSet {
        &self.rpm_api
    }

    pub fn rpm_filter(&self) -> &StringSet {
        &self.rpm_filter
    }

    pub fn rpm_artifacts(&self) -> &StringSet {
        &self.rpm_artifacts
    }

    pub fn rpm_components(&self) -> &BTreeMap<String, RpmComponent> {
        &self.rpm_components
    }

    pub fn module_components(&self) -> &BTreeMap<String, ModuleComponent> {
        &self.module_components
    }

    pub fn servicelevels(&self) -> &BTreeMap<String, ServiceLevel> {
        &self.servicelevels
    }

    pub fn xmd(&self) -> Option<&serde_yaml::Value> {
        self.xmd.as_ref()
    }

    pub fn buildopts(&self) -> Option<&BuildOptions> {
        self.buildopts.as_ref()
    }

    pub fn buildrequires(&self) -> &ModuleStreamMap {
        &self.buildrequires
    }

    pub fn requires(&self) -> &ModuleStreamMap {
        &self.requires
    }

    pub fn eol(&self) -> Option<NaiveDate> {
        self.eol
    }

    pub fn dependencies(&self) -> &[Dependencies] {
        &self.dependencies
    }

    pub fn set_mdversion(&mut self, mdversion: u64) {
        self.mdversion = mdversion;
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn set_stream(&mut self, stream: Option<String>) {
        self.stream = stream;
    }

    pub fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    pub fn set_context(&mut self, context: Option<String>) {
        self.context = context;
    }

    pub fn set_arch(&mut self, arch: Option<String>) {
        self.arch = arch;
    }

    pub fn set_summary(&mut self, summary: Option<String>) {
        self.summary = summary;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_module_licenses(&mut self, licenses: StringSet) {
        self.module_licenses = licenses;
    }

    pub fn set_content_licenses(&mut self, licenses: StringSet) {
        self.content_licenses = licenses;
    }

    pub fn set_community(&mut self, url: Option<String>) {
        self.community = url;
    }

    pub fn set_documentation(&mut self, url: Option<String>) {
        self.documentation = url;
    }

    pub fn set_tracker(&mut self, url: Option<String>) {
        self.tracker = url;
    }

    pub fn set_profiles(&mut self, profiles: BTreeMap<String, Profile>) {
        self.profiles = profiles;
    }

    pub fn set_rpm_api(&mut self, rpms: StringSet) {
        self.rpm_api = rpms;
    }

    pub fn set_rpm_filter(&mut self, rpms: StringSet) {
        self.rpm_filter = rpms;
    }

    pub fn set_rpm_artifacts(&mut self, artifacts: StringSet) {
        self.rpm_artifacts = artifacts;
    }

    pub fn set_rpm_components(&mut self, components: BTreeMap<String, RpmComponent>) {
        self.rpm_components = components;
    }

    pub fn set_module_components(&mut self, components: BTreeMap<String, ModuleComponent>) {
        self.module_components = components;
    }

    pub fn set_servicelevels(&mut self, servicelevels: BTreeMap<String, ServiceLevel>) {
        self.servicelevels = servicelevels;
    }

    pub fn set_xmd(&mut self, xmd: Option<serde_yaml::Value>) {
        self.xmd = xmd;
    }

    pub fn set_buildopts(&mut self, buildopts: Option<BuildOptions>) {
        self.buildopts = buildopts;
    }

    pub fn set_buildrequires(&mut self, buildrequires: ModuleStreamMap) {
        self.buildrequires = buildrequires;
    }

    pub fn set_requires(&mut self, requires: ModuleStreamMap) {
        self.requires = requires;
    }

    pub fn set_eol(&mut self, eol: Option<NaiveDate>) {
        self.eol = eol;
    }

    pub fn set_dependencies(&mut self, dependencies: Vec<Dependencies>) {
        self.dependencies = dependencies;
    }
}
