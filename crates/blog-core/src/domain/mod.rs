//! Domain entities - the core business objects.

mod blog;
mod fields;
mod slug;
mod topic;

pub use blog::{Blog, BlogDraft, BlogFields};
pub use fields::parse_id;
pub use slug::slugify;
pub use topic::{Topic, TopicDraft, TopicFields};
