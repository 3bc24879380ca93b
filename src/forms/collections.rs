use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::collection::{Banner, Link};
use crate::domain::types::{CollectionId, TypeConstraintError};

/// Banner fields as submitted by the admin form.
#[derive(Deserialize, Validate)]
pub struct UpdateBannerForm {
    #[validate(range(min = 1))]
    pub collection_id: i32,
    #[validate(length(min = 1))]
    pub image: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link_text: String,
    #[serde(default)]
    pub link_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBannerFormPayload {
    pub collection_id: CollectionId,
    pub banner: Banner,
}

#[derive(Debug, Error)]
pub enum UpdateBannerFormError {
    #[error("Update banner form validation failed: {0}")]
    Validation(String),
    #[error("Update banner form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateBannerFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateBannerFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateBannerForm> for UpdateBannerFormPayload {
    type Error = UpdateBannerFormError;

    fn try_from(value: UpdateBannerForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let link = Link {
            text: value.link_text.trim().to_string(),
            url: value.link_url.trim().to_string(),
        };
        // A button needs both a caption and a target.
        if link.text.is_empty() != link.url.is_empty() {
            return Err(TypeConstraintError::InvalidValue(
                "banner link needs both text and url".to_string(),
            )
            .into());
        }

        Ok(Self {
            collection_id: CollectionId::new(value.collection_id)?,
            banner: Banner {
                image: value.image.trim().to_string(),
                title: value.title.trim().to_string(),
                description: value.description.trim().to_string(),
                link,
            },
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct DeleteCollectionForm {
    #[validate(range(min = 1))]
    pub collection_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCollectionFormPayload {
    pub collection_id: CollectionId,
}

#[derive(Debug, Error)]
pub enum DeleteCollectionFormError {
    #[error("Delete collection form validation failed: {0}")]
    Validation(String),
    #[error("Delete collection form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for DeleteCollectionFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for DeleteCollectionFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<DeleteCollectionForm> for DeleteCollectionFormPayload {
    type Error = DeleteCollectionFormError;

    fn try_from(value: DeleteCollectionForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            collection_id: CollectionId::new(value.collection_id)?,
        })
    }
}
