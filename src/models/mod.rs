pub mod category;
pub mod collection;
#[cfg(feature = "services")]
pub mod config;
pub mod section;
pub mod section_image;
