use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, Topic};
use crate::error::RepoError;
use crate::query::{BlogQuery, Page};

/// Generic repository trait for the operations every record supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;
}

/// Blog repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// Run a filtered list query and return the requested page.
    ///
    /// Results are ordered by publish time, newest first, then by id. Pages
    /// past the end come back empty with the real `count`.
    async fn list(&self, query: &BlogQuery) -> Result<Page<Blog>, RepoError>;

    /// Find a blog only if it was written by `creator`.
    async fn find_by_id_and_creator(
        &self,
        id: Uuid,
        creator: Uuid,
    ) -> Result<Option<Blog>, RepoError>;
}

/// Topic repository.
#[async_trait]
pub trait TopicRepository: BaseRepository<Topic, Uuid> {
    /// All topics, ordered by name.
    async fn list_all(&self) -> Result<Vec<Topic>, RepoError>;

    /// The subset of `ids` that exist.
    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Topic>, RepoError>;
}
