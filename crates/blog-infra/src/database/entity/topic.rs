//! Topic entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub topic: String,
    pub slug: String,
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

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Topic.
impl From<Model> for blog_core::domain::Topic {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            topic: model.topic,
            slug: model.slug,
        }
    }
}

/// Conversion from Domain Topic to SeaORM ActiveModel.
impl From<blog_core::domain::Topic> for ActiveModel {
    fn from(topic: blog_core::domain::Topic) -> Self {
        Self {
            id: Set(topic.id),
            topic: Set(topic.topic),
            slug: Set(topic.slug),
        }
    }
}
