pub mod collections;
pub mod errors;
pub mod navigation;

pub use errors::{ServiceError, ServiceResult};
