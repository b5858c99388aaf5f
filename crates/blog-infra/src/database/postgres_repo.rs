//! PostgreSQL repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, Query, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DbConn, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set, TransactionTrait,
};
use uuid::Uuid;

use blog_core::domain::{Blog, Topic};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogRepository, TopicRepository};
use blog_core::query::{BlogFilter, BlogQuery, Page};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::blog_topic::{self, Entity as BlogTopicEntity};
use super::entity::topic::{self, Entity as TopicEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err, upsert};

/// PostgreSQL topic repository.
pub type PostgresTopicRepository = PostgresBaseRepository<TopicEntity>;

/// PostgreSQL blog repository.
///
/// A blog spans its `blogs` row and its `blog_topics` links, so it does not
/// go through the generic base repository.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Topic ids linked to each of `blog_ids`.
    async fn topic_links(&self, blog_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Uuid>>, RepoError> {
        let mut links: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        if blog_ids.is_empty() {
            return Ok(links);
        }

        let rows = links_query(blog_ids)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        for row in rows {
            links.entry(row.blog_id).or_default().push(row.topic_id);
        }
        Ok(links)
    }

    async fn with_topics(&self, models: Vec<blog::Model>) -> Result<Vec<Blog>, RepoError> {
        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let mut links = self.topic_links(&ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let topics = links.remove(&m.id).unwrap_or_default();
                m.into_domain(topics)
            })
            .collect())
    }
}

/// Topic links of `blog_ids`, in the order they were attached.
pub(crate) fn links_query(blog_ids: &[Uuid]) -> Select<BlogTopicEntity> {
    BlogTopicEntity::find()
        .filter(blog_topic::Column::BlogId.is_in(blog_ids.iter().copied()))
        .order_by_asc(blog_topic::Column::BlogId)
        .order_by_asc(blog_topic::Column::Position)
}

/// Escape LIKE wildcards and wrap the term for a substring match.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive LIKE on `column`.
fn icontains(column: impl IntoColumnRef, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

/// WHERE clause for a blog list filter.
pub(crate) fn filter_condition(filter: &BlogFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(range) = filter.published {
        condition = condition.add(blog::Column::PublishedTime.between(range.from, range.to));
    }

    if let Some(topic_id) = filter.topic {
        condition = condition.add(
            blog::Column::Id.in_subquery(
                Query::select()
                    .column(blog_topic::Column::BlogId)
                    .from(BlogTopicEntity)
                    .and_where(blog_topic::Column::TopicId.eq(topic_id))
                    .to_owned(),
            ),
        );
    }

    if let Some(term) = &filter.search {
        let pattern = like_pattern(term);
        // Topic names are matched through a subquery so a blog linked to
        // several matching topics is still returned once.
        let by_topic_name = Query::select()
            .column((BlogTopicEntity, blog_topic::Column::BlogId))
            .from(BlogTopicEntity)
            .inner_join(
                TopicEntity,
                Expr::col((TopicEntity, topic::Column::Id))
                    .equals((BlogTopicEntity, blog_topic::Column::TopicId)),
            )
            .and_where(icontains((TopicEntity, topic::Column::Topic), &pattern))
            .to_owned();

        condition = condition.add(
            Condition::any()
                .add(icontains((BlogEntity, blog::Column::Title), &pattern))
                .add(icontains((BlogEntity, blog::Column::Description), &pattern))
                .add(blog::Column::Id.in_subquery(by_topic_name)),
        );
    }

    condition
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for PostgresBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let Some(model) = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(self.with_topics(vec![model]).await?.pop())
    }

    async fn save(&self, blog: Blog) -> Result<Blog, RepoError> {
        tracing::debug!(blog_id = %blog.id, topics = blog.related_topics.len(), "Saving blog");

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = upsert(&txn, blog::ActiveModel::from(&blog)).await?;

        BlogTopicEntity::delete_many()
            .filter(blog_topic::Column::BlogId.eq(blog.id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if !blog.related_topics.is_empty() {
            let links = blog
                .related_topics
                .iter()
                .zip(0..)
                .map(|(topic_id, position)| blog_topic::ActiveModel {
                    blog_id: Set(blog.id),
                    topic_id: Set(*topic_id),
                    position: Set(position),
                });
            BlogTopicEntity::insert_many(links)
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(model.into_domain(blog.related_topics))
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list(&self, query: &BlogQuery) -> Result<Page<Blog>, RepoError> {
        tracing::debug!(filter = ?query.filter, page = query.page.page, "Listing blogs");

        let select = BlogEntity::find()
            .filter(filter_condition(&query.filter))
            .order_by_desc(blog::Column::PublishedTime)
            .order_by_asc(blog::Column::Id);

        let count = select.clone().count(&self.db).await.map_err(map_db_err)?;
        let mut page = Page {
            items: Vec::new(),
            count,
            page: query.page.page,
            page_size: query.page.page_size,
        };
        // Out-of-range pages never reach the database; their offset may not
        // fit a BIGINT.
        if page.page > page.total_pages() || count == 0 {
            return Ok(page);
        }

        let models = select
            .offset(query.page.offset())
            .limit(query.page.page_size.min(count))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        page.items = self.with_topics(models).await?;
        Ok(page)
    }

    async fn find_by_id_and_creator(
        &self,
        id: Uuid,
        creator: Uuid,
    ) -> Result<Option<Blog>, RepoError> {
        let Some(model) = BlogEntity::find_by_id(id)
            .filter(blog::Column::CreatorId.eq(creator))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(self.with_topics(vec![model]).await?.pop())
    }
}

#[async_trait]
impl TopicRepository for PostgresTopicRepository {
    async fn list_all(&self) -> Result<Vec<Topic>, RepoError> {
        let result = TopicEntity::find()
            .order_by_asc(topic::Column::Topic)
            .order_by_asc(topic::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Topic>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = TopicEntity::find()
            .filter(topic::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
