//! Blog entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub published_time: i64,
    pub creator_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blog_topic::Entity")]
    BlogTopic,
}

impl Related<super::blog_topic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogTopic.def()
    }
}

impl Related<super::topic::Entity> for Entity {
    fn to() -> RelationDef {
        super::blog_topic::Relation::Topic.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::blog_topic::Relation::Blog.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Domain blog from this row and the ids of its linked topics.
    pub fn into_domain(self, related_topics: Vec<Uuid>) -> blog_core::domain::Blog {
        blog_core::domain::Blog {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            published_time: self.published_time,
            related_topics,
            creator: self.creator_id,
        }
    }
}

/// Row columns of a domain Blog. Topic links live in `blog_topics`.
impl From<&blog_core::domain::Blog> for ActiveModel {
    fn from(blog: &blog_core::domain::Blog) -> Self {
        Self {
            id: Set(blog.id),
            title: Set(blog.title.clone()),
            slug: Set(blog.slug.clone()),
            description: Set(blog.description.clone()),
            published_time: Set(blog.published_time),
            creator_id: Set(blog.creator),
        }
    }
}
