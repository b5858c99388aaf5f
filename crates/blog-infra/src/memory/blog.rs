use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::Blog;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogRepository};
use blog_core::query::{BlogQuery, Page};

use super::InMemoryTopicRepository;

/// In-memory blog store.
///
/// Searching by topic name reads the names from the shared topic store.
pub struct InMemoryBlogRepository {
    store: RwLock<HashMap<Uuid, Blog>>,
    topics: Arc<InMemoryTopicRepository>,
}

impl InMemoryBlogRepository {
    pub fn new(topics: Arc<InMemoryTopicRepository>) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            topics,
        }
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, blog: Blog) -> Result<Blog, RepoError> {
        self.store.write().await.insert(blog.id, blog.clone());
        Ok(blog)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self, query: &BlogQuery) -> Result<Page<Blog>, RepoError> {
        let snapshot: Vec<Blog> = self.store.read().await.values().cloned().collect();

        let mut matching = Vec::new();
        for blog in snapshot {
            let names = match query.filter.search {
                Some(_) => self.topics.names_of(&blog.related_topics).await,
                None => Vec::new(),
            };
            if query.filter.matches(&blog, &names) {
                matching.push(blog);
            }
        }

        matching.sort_by(|a, b| {
            b.published_time
                .cmp(&a.published_time)
                .then(a.id.cmp(&b.id))
        });

        let count = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(query.page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(query.page.page_size).unwrap_or(usize::MAX))
            .collect();

        Ok(Page {
            items,
            count,
            page: query.page.page,
            page_size: query.page.page_size,
        })
    }

    async fn find_by_id_and_creator(
        &self,
        id: Uuid,
        creator: Uuid,
    ) -> Result<Option<Blog>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .get(&id)
            .filter(|b| b.creator == creator)
            .cloned())
    }
}
