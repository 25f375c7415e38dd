use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::{
    build_options::BuildOptions,
    components::{ModuleComponent, Profile, RpmComponent, ServiceLevel},
    dependencies::{Dependencies, ModuleStreamMap},
    field::names,
    mdversion::{MdVersion, MdVersionError},
    string_set::StringSet,
};

static EMPTY_STREAM_MAP: ModuleStreamMap = BTreeMap::new();

/// A module document as produced by the loader for mdversion 1 and early
/// mdversion 2 input.
///
/// Conversion only ever reads it through `&LegacyDocument`. The setters
/// exist for loaders building the document up field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LegacyDocument {
    mdversion: u64,
    name: Option<String>,
    stream: Option<String>,
    version: u64,
    context: Option<String>,
    arch: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    module_licenses: StringSet,
    content_licenses: StringSet,
    community: Option<String>,
    documentation: Option<String>,
    tracker: Option<String>,
    profiles: BTreeMap<String, Profile>,
    rpm_api: StringSet,
    rpm_filter: StringSet,
    rpm_artifacts: StringSet,
    rpm_components: BTreeMap<String, RpmComponent>,
    module_components: BTreeMap<String, ModuleComponent>,
    servicelevels: BTreeMap<String, ServiceLevel>,
    xmd: Option<serde_yaml::Value>,
    buildopts: Option<BuildOptions>,
    buildrequires: ModuleStreamMap,
    requires: ModuleStreamMap,
    eol: Option<NaiveDate>,
    dependencies: Vec<Dependencies>,
}

impl LegacyDocument {
    pub fn new(mdversion: u64) -> Self {
        Self {
            mdversion,
            ..Self::default()
        }
    }

    pub fn mdversion(&self) -> u64 {
        self.mdversion
    }

    pub fn schema_version(&self) -> Result<MdVersion, MdVersionError> {
        MdVersion::new(self.mdversion)
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

    /// Version 1 only. Empty on any other version.
    pub fn buildrequires(&self) -> &ModuleStreamMap {
        if self.mdversion == 1 {
            &self.buildrequires
        } else {
            &EMPTY_STREAM_MAP
        }
    }

    /// Version 1 only. Empty on any other version.
    pub fn requires(&self) -> &ModuleStreamMap {
        if self.mdversion == 1 {
            &self.requires
        } else {
            &EMPTY_STREAM_MAP
        }
    }

    /// Version 1 only. `None` both when unset and on any other version.
    pub fn eol(&self) -> Option<NaiveDate> {
        if self.mdversion == 1 {
            self.eol
        } else {
            None
        }
    }

    /// Version 2 and later. Empty otherwise.
    pub fn dependencies(&self) -> &[Dependencies] {
        if self.mdversion >= 2 {
            &self.dependencies
        } else {
            &[]
        }
    }

    /// Names of fields holding data the document's mdversion does not
    /// define. The accessors above hide such data.
    pub fn inapplicable_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.mdversion != 1 {
            if !self.buildrequires.is_empty() {
                fields.push(names::BUILDREQUIRES);
            }
            if !self.requires.is_empty() {
                fields.push(names::REQUIRES);
            }
            if self.eol.is_some() {
                fields.push(names::EOL);
            }
        }
        if self.mdversion < 2 && !self.dependencies.is_empty() {
            fields.push(names::DEPENDENCIES);
        }
        fields
    }

    pub fn set_mdversion(&mut self, mdversion: u64) {
        self.mdversion = mdversion;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_stream(&mut self, stream: impl Into<String>) {
        self.stream = Some(stream.into());
    }

    pub fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = Some(context.into());
    }

    pub fn set_arch(&mut self, arch: impl Into<String>) {
        self.arch = Some(arch.into());
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn set_module_licenses(&mut self, licenses: StringSet) {
        self.module_licenses = licenses;
    }

    pub fn set_content_licenses(&mut self, licenses: StringSet) {
        self.content_licenses = licenses;
    }

    pub fn set_community(&mut self, url: impl Into<String>) {
        self.community = Some(url.into());
    }

    pub fn set_documentation(&mut self, url: impl Into<String>) {
        self.documentation = Some(url.into());
    }

    pub fn set_tracker(&mut self, url: impl Into<String>) {
        self.tracker = Some(url.into());
    }

    pub fn add_profile(&mut self, profile: Profile) {
        self.profiles.insert(profile.name.clone(), profile);
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

    pub fn add_rpm_component(&mut self, component: RpmComponent) {
        self.rpm_components.insert(component.name.clone(), component);
    }

    pub fn add_module_component(&mut self, component: ModuleComponent) {
        self.module_components.insert(component.name.clone(), component);
    }

    pub fn add_servicelevel(&mut self, servicelevel: ServiceLevel) {
        self.servicelevels.insert(servicelevel.name.clone(), servicelevel);
    }

    pub fn set_xmd(&mut self, xmd: serde_yaml::Value) {
        self.xmd = Some(xmd);
    }

    pub fn set_buildopts(&mut self, buildopts: BuildOptions) {
        self.buildopts = Some(buildopts);
    }

    pub fn add_buildrequires(&mut self, module: impl Into<String>, stream: impl Into<String>) {
        self.buildrequires.insert(module.into(), stream.into());
    }

    pub fn add_requires(&mut self, module: impl Into<String>, stream: impl Into<String>) {
        self.requires.insert(module.into(), stream.into());
    }

    pub fn set_eol(&mut self, eol: Option<NaiveDate>) {
        self.eol = eol;
    }

    pub fn add_dependencies(&mut self, dependencies: Dependencies) {
        self.dependencies.push(dependencies);
    }
}
