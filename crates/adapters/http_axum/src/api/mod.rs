//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod haikus;

use axum::Router;
use axum::routing::get;

use haikus_app::ports::HaikuRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<HR>() -> Router<AppState<HR>>
where
    HR: HaikuRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/haikus",
            get(haikus::list::<HR>).post(haikus::create::<HR>),
        )
        .route(
            "/haikus/{id}",
            get(haikus::get::<HR>)
                .put(haikus::update::<HR>)
                .delete(haikus::delete::<HR>),
        )
}
