use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::collection::{BannerRow, CollectionDetailRecord};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `collection_details` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::collection_details)]
pub struct CollectionDetail {
    pub id: i32,
    pub name: String,
    pub banner_image: String,
    pub banner_title: String,
    pub banner_description: String,
    pub banner_link_text: String,
    pub banner_link_url: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`CollectionDetail`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::collection_details)]
pub struct NewCollectionDetail<'a> {
    pub name: &'a str,
    pub banner_image: &'a str,
    pub banner_title: &'a str,
    pub banner_description: &'a str,
    pub banner_link_text: &'a str,
    pub banner_link_url: &'a str,
}

impl<'a> NewCollectionDetail<'a> {
    pub fn new(name: &'a str, banner: &'a BannerRow) -> Self {
        Self {
            name,
            banner_image: &banner.image,
            banner_title: &banner.title,
            banner_description: &banner.description,
            banner_link_text: &banner.link_text,
            banner_link_url: &banner.link_url,
        }
    }
}

/// Banner columns of `collection_details` written by the update path.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::collection_details)]
pub struct BannerChangeset<'a> {
    pub banner_image: &'a str,
    pub banner_title: &'a str,
    pub banner_description: &'a str,
    pub banner_link_text: &'a str,
    pub banner_link_url: &'a str,
}

impl<'a> From<&'a BannerRow> for BannerChangeset<'a> {
    fn from(banner: &'a BannerRow) -> Self {
        Self {
            banner_image: &banner.image,
            banner_title: &banner.title,
            banner_description: &banner.description,
            banner_link_text: &banner.link_text,
            banner_link_url: &banner.link_url,
        }
    }
}

impl TryFrom<CollectionDetail> for CollectionDetailRecord {
    type Error = TypeConstraintError;

    fn try_from(detail: CollectionDetail) -> Result<Self, Self::Error> {
        Ok(Self {
            id: detail.id.try_into()?,
            name: detail.name,
            banner: BannerRow {
                image: detail.banner_image,
                title: detail.banner_title,
                description: detail.banner_description,
                link_text: detail.banner_link_text,
                link_url: detail.banner_link_url,
            },
        })
    }
}
