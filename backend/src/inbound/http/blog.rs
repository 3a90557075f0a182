//! Public blog feed handler.

use actix_web::{get, web};

use crate::domain::BlogPost;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BlogPostSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// List every published post, newest first.
#[utoipa::path(
    get,
    path = "/blog-posts",
    responses(
        (status = 200, description = "Blog feed", body = [BlogPostSchema]),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["blog"],
    operation_id = "listBlogPosts"
)]
#[get("/blog-posts")]
pub async fn list_blog_posts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BlogPost>>> {
    let posts = state.blog.list_posts().await?;
    Ok(web::Json(posts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::inbound::http::test_utils::MockPorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    fn post(id: i64, slug: &str) -> BlogPost {
        BlogPost {
            id,
            slug: slug.into(),
            title: "Airport etiquette".into(),
            summary: "What to expect at arrivals".into(),
            body: "Your driver waits in the arrivals hall.".into(),
            hero_image: None,
            tag: Some("Travel".into()),
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).single().expect("valid date"),
        }
    }

    async fn get_feed(ports: MockPorts) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(ports.into_state()))
                .service(list_blog_posts),
        )
        .await;
        let request = actix_test::TestRequest::get().uri("/blog-posts").to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body: Value = actix_test::read_body_json(response).await;
        (status, body)
    }

    #[actix_web::test]
    async fn feed_is_returned_in_service_order() {
        let mut ports = MockPorts::default();
        ports
            .blog
            .expect_list_posts()
            .times(1)
            .return_once(|| Ok(vec![post(3, "newer"), post(2, "older")]));

        let (status, body) = get_feed(ports).await;

        assert_eq!(status, StatusCode::OK);
        let slugs: Vec<&str> = body
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|entry| entry["slug"].as_str())
            .collect();
        assert_eq!(slugs, ["newer", "older"]);
        assert_eq!(body[0]["heroImage"], Value::Null);
        assert_eq!(body[0]["publishedAt"], "2024-05-01T09:00:00Z");
    }

    #[actix_web::test]
    async fn empty_feed_is_an_empty_array() {
        let mut ports = MockPorts::default();
        ports.blog.expect_list_posts().return_once(|| Ok(Vec::new()));

        let (status, body) = get_feed(ports).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Array(Vec::new()));
    }

    #[actix_web::test]
    async fn store_failure_is_server_error() {
        let mut ports = MockPorts::default();
        ports
            .blog
            .expect_list_posts()
            .return_once(|| Err(Error::internal("blog repository unavailable")));

        let (status, body) = get_feed(ports).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server error");
    }
}
