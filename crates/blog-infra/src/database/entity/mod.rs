//! SeaORM entities.

pub mod blog;
pub mod blog_topic;
pub mod topic;
