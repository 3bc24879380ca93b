//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, but
//! repositories and services still want `?` to work on constraint failures.

use pushkind_common::repository::errors::RepositoryError;

use crate::domain::types::TypeConstraintError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "services")]
mod services {
    use crate::forms::collections::{DeleteCollectionFormError, UpdateBannerFormError};
    use crate::services::ServiceError;

    impl From<UpdateBannerFormError> for ServiceError {
        fn from(val: UpdateBannerFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<DeleteCollectionFormError> for ServiceError {
        fn from(val: DeleteCollectionFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
