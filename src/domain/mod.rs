pub mod category;
pub mod collection;
pub mod dictionary;
pub mod menu;
pub mod types;
