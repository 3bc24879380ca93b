use serde::{Deserialize, Serialize};

/// Navigation node produced by the menu builder.
///
/// Menu items are rebuilt from scratch on every request and never persisted.
/// `children` is always present, possibly empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// A linked item without children.
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            children: Vec::new(),
        }
    }

    /// Replace the children of this item.
    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }
}
