use axum::routing::get;
use axum::Router;

pub mod buckets;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route("/buckets", get(buckets::root_handler))
        .route("/buckets/", get(buckets::root_handler))
        .route("/buckets/*bucket_path", get(buckets::handler))
        .with_state(state)
}
