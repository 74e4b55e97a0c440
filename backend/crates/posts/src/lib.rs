//! Posts Backend Module
//!
//! Minimal content module: create and list posts. Listing is
//! keyset-paginated with the kernel cursor, ordered by
//! `(created_at DESC, post_id DESC)`, which is what keeps pages stable
//! while new posts arrive.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{PostsError, PostsResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::posts_router;
