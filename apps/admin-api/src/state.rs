//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::{BlogService, TopicService};
use blog_infra::database::DatabaseConfig;
use blog_infra::{InMemoryBlogRepository, InMemoryTopicRepository};

#[cfg(feature = "postgres")]
use blog_infra::database::{DatabaseConnections, PostgresBlogRepository, PostgresTopicRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: BlogService,
    pub topics: TopicService,
}

impl AppState {
    /// State backed by in-memory repositories.
    pub fn in_memory() -> Self {
        let topics = Arc::new(InMemoryTopicRepository::new());
        let blogs = Arc::new(InMemoryBlogRepository::new(topics.clone()));

        Self {
            blogs: BlogService::new(blogs, topics.clone()),
            topics: TopicService::new(topics),
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    let topics = Arc::new(PostgresTopicRepository::new(connections.main.clone()));
                    let blogs = Arc::new(PostgresBlogRepository::new(connections.main));
                    Self {
                        blogs: BlogService::new(blogs, topics.clone()),
                        topics: TopicService::new(topics),
                    }
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }
}
