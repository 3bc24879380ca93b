use diesel::prelude::*;

use crate::domain::collection::SectionImage as DomainSectionImage;
use crate::domain::types::SectionKind;

/// Diesel model representing the `section_images` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::section_images)]
pub struct SectionImage {
    pub id: i32,
    pub section_id: i32,
    pub section_type: String,
    pub src: String,
    pub alt: String,
    pub sort_order: Option<i32>,
}

/// Insertable form of [`SectionImage`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::section_images)]
pub struct NewSectionImage<'a> {
    pub section_id: i32,
    pub section_type: &'a str,
    pub src: &'a str,
    pub alt: &'a str,
    pub sort_order: Option<i32>,
}

impl<'a> NewSectionImage<'a> {
    pub fn new(section_id: i32, kind: SectionKind, image: &'a DomainSectionImage) -> Self {
        Self {
            section_id,
            section_type: kind.as_str(),
            src: &image.src,
            alt: &image.alt,
            sort_order: Some(image.order),
        }
    }
}

impl From<SectionImage> for DomainSectionImage {
    fn from(image: SectionImage) -> Self {
        Self {
            src: image.src,
            alt: image.alt,
            // Rows saved before ordering existed have no position.
            order: image.sort_order.unwrap_or_default(),
        }
    }
}
