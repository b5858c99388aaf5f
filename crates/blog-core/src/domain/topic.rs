use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fields::{MAX_TEXT_LENGTH, check_slug, required_text};
use super::slug::slugify;
use crate::error::{DomainError, FieldErrors};

/// Topic entity - a subject blogs can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: Uuid,
    pub topic: String,
    pub slug: String,
}

impl Topic {
    /// Create a new topic from validated fields.
    pub fn new(fields: TopicFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic: fields.topic,
            slug: fields.slug,
        }
    }

    /// Overwrite the editable fields, keeping the id.
    pub fn apply(&mut self, fields: TopicFields) {
        self.topic = fields.topic;
        self.slug = fields.slug;
    }
}

/// Unvalidated topic payload.
#[derive(Debug, Clone, Default)]
pub struct TopicDraft {
    pub topic: Option<String>,
}

/// Topic fields that passed validation, slug included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicFields {
    pub topic: String,
    pub slug: String,
}

impl TopicDraft {
    pub fn validate(self) -> Result<TopicFields, DomainError> {
        let mut errors = FieldErrors::new();

        let topic = required_text(&mut errors, "topic", self.topic, Some(MAX_TEXT_LENGTH));
        let slug = topic.as_deref().map(slugify).unwrap_or_default();
        if topic.is_some() {
            check_slug(&mut errors, &slug);
        }

        errors.into_result()?;

        Ok(TopicFields {
            topic: topic.unwrap_or_default(),
            slug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_slug_is_derived() {
        let fields = TopicDraft {
            topic: Some("Machine Learning".to_string()),
        }
        .validate()
        .unwrap();

        assert_eq!(fields.topic, "Machine Learning");
        assert_eq!(fields.slug, "machine-learning");
    }

    #[test]
    fn test_missing_topic_is_field_error() {
        let err = TopicDraft::default().validate().unwrap_err();
        let DomainError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.get("topic"),
            Some(&["This field is required.".to_string()][..])
        );
        assert!(errors.get("slug").is_none());
    }

    #[test]
    fn test_unsluggable_topic_fails_on_slug() {
        let err = TopicDraft {
            topic: Some("???".to_string()),
        }
        .validate()
        .unwrap_err();
        let DomainError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.get("slug").is_some());
    }

    #[test]
    fn test_accented_topic_is_accepted() {
        let fields = TopicDraft {
            topic: Some("Élégance".to_string()),
        }
        .validate()
        .unwrap();
        assert_eq!(fields.slug, "elegance");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut topic = Topic::new(
            TopicDraft {
                topic: Some("Rust".to_string()),
            }
            .validate()
            .unwrap(),
        );
        let id = topic.id;

        topic.apply(
            TopicDraft {
                topic: Some("Rust Lang".to_string()),
            }
            .validate()
            .unwrap(),
        );

        assert_eq!(topic.id, id);
        assert_eq!(topic.slug, "rust-lang");
    }
}
