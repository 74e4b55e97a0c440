//! Application Layer

pub mod create_post;
pub mod list_posts;

pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use list_posts::ListPostsUseCase;

#[cfg(test)]
mod tests;
