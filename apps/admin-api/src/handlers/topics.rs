//! Topic handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Topic, TopicDraft, parse_id};
use blog_shared::dto::{TopicRequest, TopicResponse, TopicUpdateRequest};

use crate::middleware::auth::SuperUser;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn topic_response(topic: Topic) -> TopicResponse {
    TopicResponse {
        id: topic.id.to_string(),
        topic: topic.topic,
        slug: topic.slug,
    }
}

/// GET /api/topics
pub async fn list_topics(
    _user: SuperUser,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let topics: Vec<TopicResponse> = state
        .topics
        .list()
        .await?
        .into_iter()
        .map(topic_response)
        .collect();

    Ok(HttpResponse::Ok().json(topics))
}

/// POST /api/topics
pub async fn create_topic(
    _user: SuperUser,
    state: web::Data<AppState>,
    body: web::Json<TopicRequest>,
) -> AppResult<HttpResponse> {
    let draft = TopicDraft {
        topic: body.into_inner().topic,
    };
    let topic = state.topics.create(draft).await?;

    tracing::info!(topic_id = %topic.id, slug = %topic.slug, "Topic created");
    Ok(HttpResponse::Ok().json(topic_response(topic)))
}

/// PUT /api/topics - the topic id is taken from the body.
pub async fn update_topic(
    _user: SuperUser,
    state: web::Data<AppState>,
    body: web::Json<TopicUpdateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let id = parse_id(req.id.as_deref())?;
    let topic = state
        .topics
        .update(id, TopicDraft { topic: req.topic })
        .await?;

    tracing::info!(topic_id = %topic.id, "Topic updated");
    Ok(HttpResponse::Ok().json(topic_response(topic)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use uuid::Uuid;

    use crate::handlers::configure_routes;
    use crate::handlers::test_support::TestContext;

    #[actix_web::test]
    async fn test_create_rename_and_list_topics() {
        let ctx = TestContext::new();
        let app = test::init_service(
            App::new()
                .app_data(ctx.state.clone())
                .app_data(ctx.tokens.clone())
                .configure(configure_routes),
        )
        .await;
        let token = ctx.superuser(Uuid::new_v4());

        let req = test::TestRequest::post()
            .uri("/api/topics")
            .insert_header((header::AUTHORIZATION, token.clone()))
            .set_json(json!({ "topic": "Machine Learning" }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created["slug"], "machine-learning");

        let req = test::TestRequest::put()
            .uri("/api/topics")
            .insert_header((header::AUTHORIZATION, token.clone()))
            .set_json(json!({ "id": created["id"], "topic": "Deep Learning" }))
            .to_request();
        let renamed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(renamed["id"], created["id"]);
        assert_eq!(renamed["slug"], "deep-learning");

        let req = test::TestRequest::get()
            .uri("/api/topics")
            .insert_header((header::AUTHORIZATION, token))
            .to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["topic"], "Deep Learning");
    }

    #[actix_web::test]
    async fn test_update_without_id_is_bad_request() {
        let ctx = TestContext::new();
        let app = test::init_service(
            App::new()
                .app_data(ctx.state.clone())
                .app_data(ctx.tokens.clone())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/topics")
            .insert_header((header::AUTHORIZATION, ctx.superuser(Uuid::new_v4())))
            .set_json(json!({ "topic": "Orphan" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Invalid request");
    }

    #[actix_web::test]
    async fn test_create_blank_topic_is_rejected() {
        let ctx = TestContext::new();
        let app = test::init_service(
            App::new()
                .app_data(ctx.state.clone())
                .app_data(ctx.tokens.clone())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topics")
            .insert_header((header::AUTHORIZATION, ctx.superuser(Uuid::new_v4())))
            .set_json(json!({ "topic": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["errors"]["topic"].is_array());
    }
}
