//! Services - the blog and topic operations exposed by the API.

mod blog;
mod topic;

pub use blog::BlogService;
pub use topic::TopicService;

use uuid::Uuid;

use crate::error::{DomainError, FieldErrors};
use crate::ports::TopicRepository;

/// Reject related topic ids that do not reference a stored topic.
async fn ensure_topics_exist(
    topics: &dyn TopicRepository,
    ids: &[Uuid],
) -> Result<(), DomainError> {
    if ids.is_empty() {
        return Ok(());
    }

    let found = topics.find_many(ids).await?;
    let mut errors = FieldErrors::new();
    for id in ids {
        if !found.iter().any(|t| t.id == *id) {
            errors.add(
                "related_topics",
                format!("Invalid pk \"{}\" - object does not exist.", id),
            );
        }
    }
    errors.into_result()
}
