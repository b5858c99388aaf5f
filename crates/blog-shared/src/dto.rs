//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional so that missing values surface as field
//! errors instead of a body parse failure.

use serde::{Deserialize, Serialize};

/// Body of blog create and update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Topic ids.
    pub related_topics: Option<Vec<String>>,
}

/// Body of a topic create request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicRequest {
    pub topic: Option<String>,
}

/// Body of a topic update request; the id travels in the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicUpdateRequest {
    pub id: Option<String>,
    pub topic: Option<String>,
}

/// A blog as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub published_time: i64,
    pub related_topics: Vec<String>,
    pub creator: String,
}

/// A topic as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicResponse {
    pub id: String,
    pub topic: String,
    pub slug: String,
}
