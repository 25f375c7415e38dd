use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::string_set::StringSet;

/// Version 1 requirement map: module name to the single stream required.
pub type ModuleStreamMap = BTreeMap<String, String>;

/// One entry of an mdversion 2 `dependencies` list.
///
/// Each map goes from a required module name to the streams it may be
/// satisfied by. An empty stream set means "any stream".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    buildrequires: BTreeMap<String, StringSet>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    requires: BTreeMap<String, StringSet>,
}

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add build-time streams for `module`, merging with any already listed.
    pub fn add_buildrequires<I, S>(&mut self, module: impl Into<String>, streams: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buildrequires.entry(module.into()).or_default().extend(streams);
    }

    /// Add run-time streams for `module`, merging with any already listed.
    pub fn add_requires<I, S>(&mut self, module: impl Into<String>, streams: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires.entry(module.into()).or_default().extend(streams);
    }

    pub fn buildrequires(&self) -> &BTreeMap<String, StringSet> {
        &self.buildrequires
    }

    pub fn requires(&self) -> &BTreeMap<String, StringSet> {
        &self.requires
    }

    pub fn buildrequires_streams(&self, module: &str) -> Option<&StringSet> {
        self.buildrequires.get(module)
    }

    pub fn requires_streams(&self, module: &str) -> Option<&StringSet> {
        self.requires.get(module)
    }

    pub fn is_empty(&self) -> bool {
        self.buildrequires.is_empty() && self.requires.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_merge_streams() {
        let mut deps = Dependencies::new();
        assert!(deps.is_empty());

        deps.add_buildrequires("platform", ["-epel7", "-f27"]);
        deps.add_buildrequires("platform", ["-f27", "-f28"]);
        deps.add_requires("runtime", ["a", "b"]);

        let platform = deps.buildrequires_streams("platform").unwrap();
        assert_eq!(platform.to_vec(), vec!["-epel7", "-f27", "-f28"]);
        assert!(deps.requires_streams("runtime").unwrap().contains("b"));
        assert!(deps.requires_streams("platform").is_none());
        assert!(!deps.is_empty());
    }

    #[test]
    fn test_any_stream_is_empty_set() {
        let mut deps = Dependencies::new();
        deps.add_requires("extras", Vec::<String>::new());

        assert!(deps.requires_streams("extras").unwrap().is_empty());
    }

    #[test]
    fn test_yaml_shape() {
        let deps: Vec<Dependencies> = serde_yaml::from_str(
            r#"
            - buildrequires:
                platform: [-epel7, -f27, -f28]
              requires:
                platform: [-epel7, -f27, -f28]
            - buildrequires:
                platform: [epel7]
                buildtools: [v1, v2]
            "#,
        )
        .unwrap();

        assert_eq!(deps.len(), 2);
        assert!(deps[0].requires_streams("platform").unwrap().contains("-f28"));
        assert!(deps[1].requires().is_empty());
        assert_eq!(deps[1].buildrequires().len(), 2);
    }
}
