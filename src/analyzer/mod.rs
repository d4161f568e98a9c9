//! Selection engine for determining the next tag from existing ones

pub mod tag_selector;

pub use tag_selector::{find_max_tag, NextTag, TagCollection, TagSelector};
