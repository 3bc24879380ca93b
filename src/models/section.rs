use diesel::prelude::*;

use crate::domain::collection::SectionRow;
use crate::domain::types::TypeConstraintError;

/// Declares the Diesel model of a section table without the secondary text pair.
macro_rules! plain_section_model {
    ($name:ident, $table:ident) => {
        #[doc = concat!("Diesel model representing the `", stringify!($table), "` table.")]
        #[derive(Debug, Clone, Identifiable, Queryable)]
        #[diesel(table_name = crate::schema::$table)]
        pub struct $name {
            pub id: i32,
            pub collection_detail_id: i32,
            pub title: String,
            pub description: String,
            pub link_text: String,
            pub link_url: String,
        }

        impl TryFrom<$name> for SectionRow {
            type Error = TypeConstraintError;

            fn try_from(section: $name) -> Result<Self, Self::Error> {
                Ok(Self {
                    id: section.id.try_into()?,
                    title: section.title,
                    description: section.description,
                    link_text: section.link_text,
                    link_url: section.link_url,
                    secondary_title: None,
                    secondary_description: None,
                })
            }
        }
    };
}

plain_section_model!(Section1, collection_sections);
plain_section_model!(Section3, collection_sections3);
plain_section_model!(Section4, collection_sections4);

/// Diesel model representing the `collection_sections2` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::collection_sections2)]
pub struct Section2 {
    pub id: i32,
    pub collection_detail_id: i32,
    pub title: String,
    pub description: String,
    pub secondary_title: String,
    pub secondary_description: String,
    pub link_text: String,
    pub link_url: String,
}

impl TryFrom<Section2> for SectionRow {
    type Error = TypeConstraintError;

    fn try_from(section: Section2) -> Result<Self, Self::Error> {
        Ok(Self {
            id: section.id.try_into()?,
            title: section.title,
            description: section.description,
            link_text: section.link_text,
            link_url: section.link_url,
            secondary_title: Some(section.secondary_title),
            secondary_description: Some(section.secondary_description),
        })
    }
}
