pub mod handlers;
pub mod response;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::store::DocumentStore;

/// Shared state injected into every handler: the document store handle.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
}

/// Build the issue API router around an opened store.
pub fn router(store: Arc<DocumentStore>) -> Router {
    Router::new()
        .route(
            "/api/issues/{project}",
            get(handlers::issue_list::list)
                .post(handlers::issue_create::create)
                .put(handlers::issue_update::update)
                .delete(handlers::issue_delete::delete),
        )
        .with_state(AppState { store })
}
