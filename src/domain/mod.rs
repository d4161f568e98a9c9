//! Domain logic - pure tag and version rules independent of git operations

pub mod tag;
pub mod version;

pub use tag::Tag;
pub use version::{BumpStrategy, Version};
