//! HTTP handlers and route configuration.

mod blogs;
mod health;
mod topics;

use actix_web::web;

use crate::middleware::error::{json_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                // Superuser routes
                .service(
                    web::resource("/blogs")
                        .route(web::get().to(blogs::list_blogs))
                        .route(web::post().to(blogs::create_blog)),
                )
                .service(
                    web::resource("/blogs/{id}")
                        .route(web::get().to(blogs::get_blog))
                        .route(web::put().to(blogs::update_blog)),
                )
                .service(
                    web::resource("/topics")
                        .route(web::get().to(topics::list_topics))
                        .route(web::post().to(topics::create_topic))
                        .route(web::put().to(topics::update_topic)),
                ),
        );
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared setup for handler tests.

    use std::sync::Arc;

    use actix_web::web;
    use blog_core::ports::{SUPERUSER_ROLE, TokenService};
    use blog_infra::{JwtConfig, JwtTokenService};
    use uuid::Uuid;

    use crate::state::AppState;

    pub struct TestContext {
        pub state: web::Data<AppState>,
        pub tokens: web::Data<Arc<dyn TokenService>>,
    }

    impl TestContext {
        pub fn new() -> Self {
            let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
                secret: "handler-test-secret".to_string(),
                ..JwtConfig::default()
            }));
            Self {
                state: web::Data::new(AppState::in_memory()),
                tokens: web::Data::new(tokens),
            }
        }

        /// `Authorization` header value for a user with `roles`.
        pub fn bearer(&self, user_id: Uuid, roles: &[&str]) -> String {
            let token = self
                .tokens
                .generate_token(
                    user_id,
                    "admin@example.com",
                    roles.iter().map(|r| r.to_string()).collect(),
                )
                .unwrap();
            format!("Bearer {}", token)
        }

        pub fn superuser(&self, user_id: Uuid) -> String {
            self.bearer(user_id, &[SUPERUSER_ROLE])
        }
    }
}
