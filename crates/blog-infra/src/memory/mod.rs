//! In-memory repositories - used when no database is configured.
//!
//! Data is lost on process restart.

mod blog;
mod topic;

pub use blog::InMemoryBlogRepository;
pub use topic::InMemoryTopicRepository;
