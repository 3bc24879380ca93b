use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::category::Category;
use crate::domain::types::LangCode;
use crate::models::category::Category as DbCategory;
use crate::repository::{CategoryReader, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self, lang: &LangCode) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let rows = categories::table
            .filter(categories::lang.eq(lang.as_str()))
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        let items = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match Category::try_from(row) {
                    Ok(category) => Some(category),
                    Err(e) => {
                        log::warn!("Skipping malformed category {id}: {e}");
                        None
                    }
                }
            })
            .collect();

        Ok(items)
    }
}
