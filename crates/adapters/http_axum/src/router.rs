//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use haikus_app::ports::HaikuRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<HR>(state: AppState<HR>) -> Router
where
    HR: HaikuRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use haikus_app::services::haiku_service::HaikuService;
    use haikus_domain::error::HaikuError;
    use haikus_domain::haiku::Haiku;
    use haikus_domain::id::HaikuId;
    use tower::ServiceExt;

    struct StubHaikuRepo;
    struct BrokenHaikuRepo;

    impl HaikuRepository for StubHaikuRepo {
        async fn create_many(&self, haikus: Vec<Haiku>) -> Result<Vec<Haiku>, HaikuError> {
            Ok(haikus)
        }
        async fn create(&self, haiku: Haiku) -> Result<Haiku, HaikuError> {
            Ok(haiku)
        }
        async fn get_by_id(&self, _id: HaikuId) -> Result<Option<Haiku>, HaikuError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Haiku>, HaikuError> {
            Ok(vec![])
        }
        async fn update(&self, haiku: Haiku) -> Result<Haiku, HaikuError> {
            Ok(haiku)
        }
        async fn delete(&self, _id: HaikuId) -> Result<(), HaikuError> {
            Ok(())
        }
    }

    fn broken() -> HaikuError {
        HaikuError::Storage(Box::new(std::io::Error::other("Liftum and Shiftum")))
    }

    impl HaikuRepository for BrokenHaikuRepo {
        async fn create_many(&self, _haikus: Vec<Haiku>) -> Result<Vec<Haiku>, HaikuError> {
            Err(broken())
        }
        async fn create(&self, _haiku: Haiku) -> Result<Haiku, HaikuError> {
            Err(broken())
        }
        async fn get_by_id(&self, _id: HaikuId) -> Result<Option<Haiku>, HaikuError> {
            Err(broken())
        }
        async fn get_all(&self) -> Result<Vec<Haiku>, HaikuError> {
            Err(broken())
        }
        async fn update(&self, _haiku: Haiku) -> Result<Haiku, HaikuError> {
            Err(broken())
        }
        async fn delete(&self, _id: HaikuId) -> Result<(), HaikuError> {
            Err(broken())
        }
    }

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(AppState::new(HaikuService::new(StubHaikuRepo)));

        let response = app.oneshot(request("GET", "/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_no_content_when_deleting() {
        let app = build(AppState::new(HaikuService::new(StubHaikuRepo)));

        let response = app
            .oneshot(request("DELETE", "/api/haikus/haiku3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_return_not_found_when_haiku_missing() {
        let app = build(AppState::new(HaikuService::new(StubHaikuRepo)));

        let response = app
            .oneshot(request("GET", "/api/haikus/haiku3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_internal_error_when_storage_fails() {
        let app = build(AppState::new(HaikuService::new(BrokenHaikuRepo)));

        let response = app
            .oneshot(request("DELETE", "/api/haikus/haiku2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn should_reject_malformed_date_on_create() {
        let app = build(AppState::new(HaikuService::new(StubHaikuRepo)));
        let body = r#"{"title":"Silence","author":"Basho Matsuo","text":"...","year_of_release":"01/01/1600"}"#;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/haikus")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
