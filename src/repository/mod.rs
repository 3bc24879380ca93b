use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::category::Category;
use crate::domain::collection::{BannerRow, CollectionDetailRecord, SectionImage, SectionRow};
use crate::domain::dictionary::LocalizedDictionary;
use crate::domain::types::{CollectionId, LangCode, SectionId, SectionKind};

pub mod category;
pub mod collection;
pub mod dictionary;

pub use dictionary::{DictionaryError, FileDictionaryRepository};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for catalog categories.
pub trait CategoryReader {
    /// List every category of one language in fetch order (ascending id).
    ///
    /// Rows that fail domain validation are skipped, never reported.
    fn list_categories(&self, lang: &LangCode) -> RepositoryResult<Vec<Category>>;
}

/// Source of per-locale UI dictionaries.
pub trait DictionaryReader {
    /// Load the dictionary for `locale`, or `None` when none is published.
    fn load_dictionary(
        &self,
        locale: &LangCode,
    ) -> Result<Option<LocalizedDictionary>, DictionaryError>;
}

/// Read-only operations for collection pages.
pub trait CollectionReader {
    /// Retrieve a collection row with its flat banner columns.
    fn get_collection_detail(
        &self,
        id: CollectionId,
    ) -> RepositoryResult<Option<CollectionDetailRecord>>;
}

/// Read-only operations for the four section tables and their images.
pub trait SectionReader {
    /// List the sections of one kind attached to a collection, in insertion order.
    fn list_sections(
        &self,
        kind: SectionKind,
        collection_id: CollectionId,
    ) -> RepositoryResult<Vec<SectionRow>>;
    /// List images attached to a section in insertion order.
    fn list_section_images(
        &self,
        section_id: SectionId,
        kind: SectionKind,
    ) -> RepositoryResult<Vec<SectionImage>>;
}

/// Write operations for collection pages.
pub trait CollectionWriter {
    /// Overwrite the banner columns of a collection.
    fn update_banner(&self, id: CollectionId, banner: &BannerRow) -> RepositoryResult<usize>;
    /// Delete a collection together with all of its sections and images.
    fn delete_collection(&self, id: CollectionId) -> RepositoryResult<usize>;
}
