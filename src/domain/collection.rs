//! Collection landing page aggregate.
//!
//! Storage keeps the banner as flat columns on the collection row and spreads
//! content blocks over four section tables. The types here describe both the
//! row-level shapes returned by the repository ([`CollectionDetailRecord`],
//! [`SectionRow`], [`BannerRow`]) and the nested document handed to the
//! rendering layer ([`CollectionDetail`]).

use serde::{Deserialize, Serialize};

use crate::domain::types::{CollectionId, SectionId, SectionKind};

/// Call-to-action link.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// Banner as stored: one column per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BannerRow {
    pub image: String,
    pub title: String,
    pub description: String,
    pub link_text: String,
    pub link_url: String,
}

/// Banner as rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Banner {
    pub image: String,
    pub title: String,
    pub description: String,
    pub link: Link,
}

impl Banner {
    /// Build the nested banner from its flat columns.
    pub fn nest(row: BannerRow) -> Self {
        Self {
            image: row.image,
            title: row.title,
            description: row.description,
            link: Link {
                text: row.link_text,
                url: row.link_url,
            },
        }
    }

    /// Inverse of [`Banner::nest`], used when writing the banner back.
    pub fn flatten(self) -> BannerRow {
        BannerRow {
            image: self.image,
            title: self.title,
            description: self.description,
            link_text: self.link.text,
            link_url: self.link.url,
        }
    }
}

impl From<BannerRow> for Banner {
    fn from(row: BannerRow) -> Self {
        Self::nest(row)
    }
}

impl From<Banner> for BannerRow {
    fn from(banner: Banner) -> Self {
        banner.flatten()
    }
}

/// The collection row itself, before sections are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDetailRecord {
    pub id: CollectionId,
    /// Display name as stored, possibly blank.
    pub name: String,
    pub banner: BannerRow,
}

/// Image attached to a section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionImage {
    pub src: String,
    pub alt: String,
    pub order: i32,
}

/// Union of the columns found across the four section tables.
///
/// Only `Section2` rows carry the secondary text pair; other tables leave it
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRow {
    pub id: SectionId,
    pub title: String,
    pub description: String,
    pub link_text: String,
    pub link_url: String,
    pub secondary_title: Option<String>,
    pub secondary_description: Option<String>,
}

/// Describes how one section kind is read and shaped.
///
/// `KIND` selects the table to query and the image discriminator; `from_row`
/// picks the fields that kind exposes.
pub trait SectionShape: Sized {
    const KIND: SectionKind;

    fn from_row(row: SectionRow, images: Vec<SectionImage>) -> Self;
}

macro_rules! plain_section {
    ($name:ident, $kind:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
        pub struct $name {
            pub id: SectionId,
            pub title: String,
            pub description: String,
            pub link: Link,
            pub images: Vec<SectionImage>,
        }

        impl SectionShape for $name {
            const KIND: SectionKind = $kind;

            fn from_row(row: SectionRow, images: Vec<SectionImage>) -> Self {
                Self {
                    id: row.id,
                    title: row.title,
                    description: row.description,
                    link: Link {
                        text: row.link_text,
                        url: row.link_url,
                    },
                    images,
                }
            }
        }
    };
}

plain_section!(
    Section1,
    SectionKind::Section1,
    "Text block with a link and a gallery."
);
plain_section!(
    Section3,
    SectionKind::Section3,
    "Feature block rendered below the secondary section."
);
plain_section!(
    Section4,
    SectionKind::Section4,
    "Closing block at the bottom of the page."
);

/// Two-column block with a secondary title/description pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section2 {
    pub id: SectionId,
    pub title: String,
    pub description: String,
    pub secondary_title: String,
    pub secondary_description: String,
    pub link: Link,
    pub images: Vec<SectionImage>,
}

impl SectionShape for Section2 {
    const KIND: SectionKind = SectionKind::Section2;

    fn from_row(row: SectionRow, images: Vec<SectionImage>) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            secondary_title: row.secondary_title.unwrap_or_default(),
            secondary_description: row.secondary_description.unwrap_or_default(),
            link: Link {
                text: row.link_text,
                url: row.link_url,
            },
            images,
        }
    }
}

/// Fully composed collection page. All four section lists are always present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionDetail {
    pub id: CollectionId,
    pub name: String,
    pub banner: Banner,
    pub sections: Vec<Section1>,
    pub sections2: Vec<Section2>,
    pub sections3: Vec<Section3>,
    pub sections4: Vec<Section4>,
}
