//! Domain Layer

pub mod entity;
pub mod repository;

pub use entity::Post;
