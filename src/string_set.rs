use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// Duplicate-free set of strings used for licenses, rpm lists and whitelists.
///
/// Iteration is sorted, so two sets with the same membership always render
/// the same way. Cloning yields a fully independent set; documents never
/// share a set between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringSet {
    values: BTreeSet<String>,
}

impl StringSet {
    pub fn new() -> Self {
        Self {
            values: BTreeSet::new(),
        }
    }

    /// Insert a value. Returns `false` if it was already present.
    pub fn add(&mut self, value: impl Into<String>) -> bool {
        self.values.insert(value.into())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn remove(&mut self, value: &str) -> bool {
        self.values.remove(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.values.iter()
    }

    /// Sorted copy of the members.
    pub fn to_vec(&self) -> Vec<String> {
        self.values.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StringSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for StringSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.values.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for StringSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut set = StringSet::new();
        assert!(set.add("MIT"));
        assert!(!set.add("MIT"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("MIT"));
        assert!(!set.contains("GPLv2+"));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let set: StringSet = ["zlib", "Beerware", "GPLv2+"].into_iter().collect();
        assert_eq!(set.to_vec(), vec!["Beerware", "GPLv2+", "zlib"]);
        assert_eq!(set.to_string(), "[Beerware, GPLv2+, zlib]");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original: StringSet = ["bar", "baz"].into_iter().collect();
        let copy = original.clone();

        original.add("xxx");
        original.remove("bar");

        assert!(copy.contains("bar"));
        assert!(!copy.contains("xxx"));
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_deserialize_collapses_duplicates() {
        let set: StringSet = serde_yaml::from_str(
            r#"
            - xxx
            - bar
            - xxx
            "#,
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["bar","xxx"]"#);
    }

    proptest! {
        #[test]
        fn prop_clone_preserves_membership(
            members in proptest::collection::vec("[a-z0-9+-]{1,12}", 0..16),
            probe in "[a-z0-9+-]{1,12}",
        ) {
            let set: StringSet = members.iter().cloned().collect();
            let twice = set.clone().clone();
            prop_assert_eq!(twice.contains(&probe), set.contains(&probe));
            for member in &members {
                prop_assert!(twice.contains(member));
            }
        }

        #[test]
        fn prop_no_duplicates(members in proptest::collection::vec("[a-c]{1,2}", 0..32)) {
            let mut set = StringSet::new();
            for member in &members {
                set.add(member.clone());
            }
            let unique: BTreeSet<_> = members.into_iter().collect();
            prop_assert_eq!(set.len(), unique.len());
        }
    }
}
