use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Property bag with case-insensitive keys.
///
/// MSBuild property names are case-insensitive; lookup order is irrelevant.
/// Lookup is a linear scan, which is fine for the bag sizes a build produces
/// and the handful of well-known keys the engine probes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(HashMap<String, String>);

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Inserts a property, replacing any existing value under a
    /// case-insensitive match of the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.0.retain(|k, _| !k.eq_ignore_ascii_case(&key));
        self.0.insert(key, value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// A single item within an item type: its evaluated spec plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub spec: String,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl ProjectItem {
    pub fn new(spec: impl Into<String>) -> Self {
        Self {
            spec: spec.into(),
            metadata: HashMap::new(),
        }
    }
}

/// Item bag: item type -> ordered list of items.
///
/// Item-type lookup is case-insensitive; item order within a type is the
/// order the build tool reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemBag(HashMap<String, Vec<ProjectItem>>);

impl ItemBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive item-type lookup.
    pub fn get(&self, item_type: &str) -> Option<&[ProjectItem]> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(item_type))
            .map(|(_, v)| v.as_slice())
    }

    /// Appends an item under the given type, reusing an existing
    /// case-insensitive type entry when present.
    pub fn push(&mut self, item_type: impl Into<String>, item: ProjectItem) {
        let item_type = item_type.into();
        match self
            .0
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&item_type))
        {
            Some((_, items)) => items.push(item),
            None => {
                self.0.insert(item_type, vec![item]);
            }
        }
    }

    /// Number of distinct item types.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ProjectItem])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup_is_case_insensitive() {
        let bag: PropertyBag = [("TargetFramework", "net8.0")].into_iter().collect();

        assert_eq!(bag.get("targetframework"), Some("net8.0"));
        assert_eq!(bag.get("TARGETFRAMEWORK"), Some("net8.0"));
        assert_eq!(bag.get("OutputType"), None);
    }

    #[test]
    fn test_property_insert_replaces_case_insensitive_match() {
        let mut bag = PropertyBag::new();
        bag.insert("Configuration", "Debug");
        bag.insert("configuration", "Release");

        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get("Configuration"), Some("Release"));
    }

    #[test]
    fn test_item_order_is_preserved() {
        let mut bag = ItemBag::new();
        bag.push("Compile", ProjectItem::new("Program.cs"));
        bag.push("compile", ProjectItem::new("Other.cs"));

        let items = bag.get("Compile").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].spec, "Program.cs");
        assert_eq!(items[1].spec, "Other.cs");
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_bag_serializes_as_plain_map() {
        let bag: PropertyBag = [("Configuration", "Debug")].into_iter().collect();
        let json = serde_json::to_string(&bag).unwrap();
        assert_eq!(json, r#"{"Configuration":"Debug"}"#);
    }
}
