//! Core library exports for the showroom content service.
//!
//! This crate turns catalog categories, localized dictionaries and collection
//! page rows into the navigation menu and collection documents rendered by
//! the storefront. The `data` feature exposes the domain, Diesel models and
//! repositories; `services` adds the composition services, forms and
//! configuration loading.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "services")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "services")]
pub mod services;
