use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, CategorySlug, LangCode};

/// Catalog category in one language, optionally nested under a root category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    /// `None` for root categories.
    pub parent_id: Option<CategoryId>,
    /// Position among siblings; lower values come first.
    pub order: i32,
    pub lang: LangCode,
}

impl Category {
    /// Whether this category sits at the top level of the catalog.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub parent_id: Option<CategoryId>,
    pub order: i32,
    pub lang: LangCode,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
