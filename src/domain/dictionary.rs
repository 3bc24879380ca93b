use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Translated UI strings for a single locale.
///
/// The dictionary is a tree of sections and groups whose leaves are strings,
/// e.g. `{"menu": {"products": "Products", "bathroom": {"title": "Bathroom"}}}`.
/// Entries are addressed by dotted paths such as `menu.bathroom.title`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct LocalizedDictionary(Value);

impl LocalizedDictionary {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    fn node(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(&self.0, |node, segment| node.as_object()?.get(segment))
    }

    /// Whether `path` resolves to a group of entries rather than a leaf.
    pub fn has_section(&self, path: &str) -> bool {
        self.node(path).is_some_and(Value::is_object)
    }

    /// Look up a translated string. Missing nodes, groups and non-string
    /// leaves all yield `None`.
    pub fn text(&self, path: &str) -> Option<&str> {
        self.node(path)?
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Look up a translated string, degrading to `default`.
    pub fn text_or(&self, path: &str, default: &str) -> String {
        self.text(path).unwrap_or(default).to_string()
    }
}

impl From<Value> for LocalizedDictionary {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
