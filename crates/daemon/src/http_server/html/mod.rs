use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use http::header::{ACCEPT, ORIGIN};
use http::Method;
use tower_http::cors::{Any, CorsLayer};

mod buckets;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    let cors_layer = CorsLayer::new()
        .allow_methods(vec![Method::GET])
        .allow_headers(vec![ACCEPT, ORIGIN])
        .allow_origin(Any)
        .allow_credentials(false);

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/buckets/") }))
        .route("/buckets", get(buckets::root_handler))
        .route("/buckets/", get(buckets::root_handler))
        .route("/buckets/*bucket_path", get(buckets::handler))
        .with_state(state)
        .layer(cors_layer)
}
