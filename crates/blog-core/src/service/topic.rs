use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Topic, TopicDraft};
use crate::error::DomainError;
use crate::ports::TopicRepository;

/// Topic listing, creation and updates.
#[derive(Clone)]
pub struct TopicService {
    topics: Arc<dyn TopicRepository>,
}

impl TopicService {
    pub fn new(topics: Arc<dyn TopicRepository>) -> Self {
        Self { topics }
    }

    pub async fn list(&self) -> Result<Vec<Topic>, DomainError> {
        Ok(self.topics.list_all().await?)
    }

    pub async fn create(&self, draft: TopicDraft) -> Result<Topic, DomainError> {
        let topic = Topic::new(draft.validate()?);
        Ok(self.topics.save(topic).await?)
    }

    pub async fn update(&self, id: Uuid, draft: TopicDraft) -> Result<Topic, DomainError> {
        let mut topic = self
            .topics
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Topic",
                id,
            })?;

        topic.apply(draft.validate()?);
        Ok(self.topics.save(topic).await?)
    }
}
