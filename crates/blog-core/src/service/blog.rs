use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::ensure_topics_exist;
use crate::domain::{Blog, BlogDraft};
use crate::error::DomainError;
use crate::ports::{BlogRepository, TopicRepository};
use crate::query::{BlogListParams, Page};

/// Blog listing, lookup, creation and creator-only updates.
#[derive(Clone)]
pub struct BlogService {
    blogs: Arc<dyn BlogRepository>,
    topics: Arc<dyn TopicRepository>,
}

impl BlogService {
    pub fn new(blogs: Arc<dyn BlogRepository>, topics: Arc<dyn TopicRepository>) -> Self {
        Self { blogs, topics }
    }

    /// Filter, search and paginate blogs.
    pub async fn list(&self, params: BlogListParams) -> Result<Page<Blog>, DomainError> {
        let query = params.into_query()?;
        let page = self.blogs.list(&query).await?;
        page.ensure_in_range()?;
        Ok(page)
    }

    pub async fn get(&self, id: Uuid) -> Result<Blog, DomainError> {
        self.blogs
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Blog",
                id,
            })
    }

    /// Create a blog authored by `creator`, published now.
    pub async fn create(&self, creator: Uuid, draft: BlogDraft) -> Result<Blog, DomainError> {
        let fields = draft.validate()?;
        ensure_topics_exist(self.topics.as_ref(), &fields.related_topics).await?;

        let blog = Blog::new(fields, creator, Utc::now().timestamp());
        Ok(self.blogs.save(blog).await?)
    }

    /// Replace a blog's content. Only its creator may do so; anyone else
    /// sees the blog as missing.
    pub async fn update(
        &self,
        id: Uuid,
        editor: Uuid,
        draft: BlogDraft,
    ) -> Result<Blog, DomainError> {
        let mut blog = self
            .blogs
            .find_by_id_and_creator(id, editor)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Blog",
                id,
            })?;

        let fields = draft.validate()?;
        ensure_topics_exist(self.topics.as_ref(), &fields.related_topics).await?;

        blog.apply(fields);
        Ok(self.blogs.save(blog).await?)
    }
}
