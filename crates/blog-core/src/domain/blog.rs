use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{MAX_TEXT_LENGTH, check_slug, invalid_uuid, required_text};
use super::slug::slugify;
use crate::error::{DomainError, FieldErrors};

/// Blog entity - a post written by an admin and filed under topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Unix seconds, fixed when the blog is created.
    pub published_time: i64,
    pub related_topics: Vec<Uuid>,
    pub creator: Uuid,
}

impl Blog {
    /// Create a new blog published at `published_time`.
    pub fn new(fields: BlogFields, creator: Uuid, published_time: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            slug: fields.slug,
            description: fields.description,
            published_time,
            related_topics: fields.related_topics,
            creator,
        }
    }

    /// Overwrite the editable fields. Id, creator and publish time stay.
    pub fn apply(&mut self, fields: BlogFields) {
        self.title = fields.title;
        self.slug = fields.slug;
        self.description = fields.description;
        self.related_topics = fields.related_topics;
    }
}

/// Unvalidated blog payload.
#[derive(Debug, Clone, Default)]
pub struct BlogDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub related_topics: Option<Vec<String>>,
}

/// Blog fields that passed validation, slug included.
///
/// `related_topics` is deduplicated, first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogFields {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub related_topics: Vec<Uuid>,
}

impl BlogDraft {
    pub fn validate(self) -> Result<BlogFields, DomainError> {
        let mut errors = FieldErrors::new();

        let title = required_text(&mut errors, "title", self.title, Some(MAX_TEXT_LENGTH));
        let slug = title.as_deref().map(slugify).unwrap_or_default();
        if title.is_some() {
            check_slug(&mut errors, &slug);
        }

        let description = required_text(&mut errors, "description", self.description, None);

        let mut related_topics: Vec<Uuid> = Vec::new();
        for raw in self.related_topics.unwrap_or_default() {
            match Uuid::parse_str(raw.trim()) {
                Ok(id) if !related_topics.contains(&id) => related_topics.push(id),
                Ok(_) => {}
                Err(_) => errors.add("related_topics", invalid_uuid(&raw)),
            }
        }

        errors.into_result()?;

        Ok(BlogFields {
            title: title.unwrap_or_default(),
            slug,
            description: description.unwrap_or_default(),
            related_topics,
        })
    }
}
