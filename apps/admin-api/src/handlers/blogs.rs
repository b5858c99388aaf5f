//! Blog handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Blog, BlogDraft, parse_id};
use blog_core::query::{BlogListParams, Page};
use blog_shared::Paginated;
use blog_shared::dto::{BlogRequest, BlogResponse};

use crate::middleware::auth::SuperUser;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn blog_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id.to_string(),
        title: blog.title,
        slug: blog.slug,
        description: blog.description,
        published_time: blog.published_time,
        related_topics: blog.related_topics.iter().map(|id| id.to_string()).collect(),
        creator: blog.creator.to_string(),
    }
}

fn paginated(page: Page<Blog>) -> Paginated<BlogResponse> {
    let total_pages = page.total_pages();
    let next = page.next_page();
    let previous = page.previous_page();
    let page = page.map(blog_response);

    Paginated {
        count: page.count,
        page: page.page,
        page_size: page.page_size,
        total_pages,
        next,
        previous,
        results: page.items,
    }
}

fn draft(req: BlogRequest) -> BlogDraft {
    BlogDraft {
        title: req.title,
        description: req.description,
        related_topics: req.related_topics,
    }
}

/// GET /api/blogs
pub async fn list_blogs(
    _user: SuperUser,
    state: web::Data<AppState>,
    params: web::Query<BlogListParams>,
) -> AppResult<HttpResponse> {
    let page = state.blogs.list(params.into_inner()).await?;
    Ok(HttpResponse::Ok().json(paginated(page)))
}

/// GET /api/blogs/{id}
pub async fn get_blog(
    _user: SuperUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(Some(path.as_str()))?;
    let blog = state.blogs.get(id).await?;
    Ok(HttpResponse::Ok().json(blog_response(blog)))
}

/// POST /api/blogs
pub async fn create_blog(
    user: SuperUser,
    state: web::Data<AppState>,
    body: web::Json<BlogRequest>,
) -> AppResult<HttpResponse> {
    let blog = state
        .blogs
        .create(user.user_id(), draft(body.into_inner()))
        .await?;

    tracing::info!(blog_id = %blog.id, creator = %blog.creator, "Blog created");
    Ok(HttpResponse::Ok().json(blog_response(blog)))
}

/// PUT /api/blogs/{id} - only the creator may update a blog.
pub async fn update_blog(
    user: SuperUser,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(Some(path.as_str()))?;
    let blog = state
        .blogs
        .update(id, user.user_id(), draft(body.into_inner()))
        .await?;

    tracing::info!(blog_id = %blog.id, "Blog updated");
    Ok(HttpResponse::Ok().json(blog_response(blog)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use uuid::Uuid;

    use crate::handlers::configure_routes;
    use crate::handlers::test_support::TestContext;
    use crate::observability::RequestIdMiddleware;

    macro_rules! app {
        ($ctx:expr) => {
            test::init_service(
                App::new()
                    .app_data($ctx.state.clone())
                    .app_data($ctx.tokens.clone())
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let ctx = TestContext::new();
        let app = app!(ctx);

        let req = test::TestRequest::get().uri("/api/blogs").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_error_bodies_carry_request_id() {
        let ctx = TestContext::new();
        let app = test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(ctx.state.clone())
                .app_data(ctx.tokens.clone())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/blogs")
            .insert_header(("X-Request-ID", "req-42"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["request_id"], "req-42");

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header(("X-Request-ID", "req-43"))
            .insert_header((header::AUTHORIZATION, ctx.superuser(Uuid::new_v4())))
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["request_id"], "req-43");
        assert!(body["errors"]["title"].is_array());
    }

    #[actix_web::test]
    async fn test_non_superuser_is_forbidden() {
        let ctx = TestContext::new();
        let app = app!(ctx);

        let req = test::TestRequest::get()
            .uri("/api/blogs")
            .insert_header((header::AUTHORIZATION, ctx.bearer(Uuid::new_v4(), &["user"])))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_create_blog_returns_record() {
        let ctx = TestContext::new();
        let app = app!(ctx);
        let creator = Uuid::new_v4();

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header((header::AUTHORIZATION, ctx.superuser(creator)))
            .set_json(json!({
                "title": "Hello World",
                "description": "First post",
                "related_topics": []
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["slug"], "hello-world");
        assert_eq!(body["creator"], creator.to_string());
        assert!(body["published_time"].as_i64().unwrap() > 0);
    }

    #[actix_web::test]
    async fn test_create_blog_with_missing_fields_lists_errors() {
        let ctx = TestContext::new();
        let app = app!(ctx);

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header((header::AUTHORIZATION, ctx.superuser(Uuid::new_v4())))
            .set_json(json!({ "title": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["errors"]["title"].is_array());
        assert!(body["errors"]["description"].is_array());
    }

    #[actix_web::test]
    async fn test_update_by_other_superuser_reports_invalid_id() {
        let ctx = TestContext::new();
        let app = app!(ctx);

        let create = test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header((header::AUTHORIZATION, ctx.superuser(Uuid::new_v4())))
            .set_json(json!({ "title": "Mine", "description": "x", "related_topics": [] }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, create).await;
        let id = created["id"].as_str().unwrap();

        let update = test::TestRequest::put()
            .uri(&format!("/api/blogs/{id}"))
            .insert_header((header::AUTHORIZATION, ctx.superuser(Uuid::new_v4())))
            .set_json(json!({ "title": "Stolen", "description": "y", "related_topics": [] }))
            .to_request();
        let resp = test::call_service(&app, update).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Invalid id provided");
    }

    #[actix_web::test]
    async fn test_get_blog_with_malformed_id_is_bad_request() {
        let ctx = TestContext::new();
        let app = app!(ctx);

        let req = test::TestRequest::get()
            .uri("/api/blogs/not-a-uuid")
            .insert_header((header::AUTHORIZATION, ctx.superuser(Uuid::new_v4())))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_returns_pagination_envelope() {
        let ctx = TestContext::new();
        let app = app!(ctx);
        let token = ctx.superuser(Uuid::new_v4());

        for i in 0..3 {
            let req = test::TestRequest::post()
                .uri("/api/blogs")
                .insert_header((header::AUTHORIZATION, token.clone()))
                .set_json(json!({
                    "title": format!("Post {i}"),
                    "description": "x",
                    "related_topics": []
                }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/blogs?page=2&page_size=2")
            .insert_header((header::AUTHORIZATION, token.clone()))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["count"], 3);
        assert_eq!(body["total_pages"], 2);
        assert_eq!(body["previous"], 1);
        assert!(body["next"].is_null());
        assert_eq!(body["results"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::get()
            .uri("/api/blogs?page=abc")
            .insert_header((header::AUTHORIZATION, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
