use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::Topic;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, TopicRepository};

/// In-memory topic store using a HashMap behind an async RwLock.
pub struct InMemoryTopicRepository {
    store: RwLock<HashMap<Uuid, Topic>>,
}

impl InMemoryTopicRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Names of the given topics, skipping ids that are not stored.
    pub(crate) async fn names_of(&self, ids: &[Uuid]) -> Vec<String> {
        let store = self.store.read().await;
        ids.iter()
            .filter_map(|id| store.get(id).map(|t| t.topic.clone()))
            .collect()
    }
}

impl Default for InMemoryTopicRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Topic, Uuid> for InMemoryTopicRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Topic>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, topic: Topic) -> Result<Topic, RepoError> {
        self.store.write().await.insert(topic.id, topic.clone());
        Ok(topic)
    }
}

#[async_trait]
impl TopicRepository for InMemoryTopicRepository {
    async fn list_all(&self) -> Result<Vec<Topic>, RepoError> {
        let mut topics: Vec<Topic> = self.store.read().await.values().cloned().collect();
        topics.sort_by(|a, b| a.topic.cmp(&b.topic).then(a.id.cmp(&b.id)));
        Ok(topics)
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Topic>, RepoError> {
        let store = self.store.read().await;
        Ok(ids.iter().filter_map(|id| store.get(id).cloned()).collect())
    }
}
