use axum::extract::{Json, Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use common::prelude::{BucketDetail, BucketPath};

use crate::http_server::listing::Listing;
use crate::ServiceState;

/// JSON form of a bucket listing. Mirrors the HTML page: a path that fails
/// to resolve still answers 200 and carries the reason in `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub path: String,
    pub error: Option<String>,
    pub entries: Vec<BucketDetail>,
}

impl From<Listing> for ListResponse {
    fn from(listing: Listing) -> Self {
        Self {
            path: listing.path.to_string(),
            error: listing.error_message(),
            entries: listing.details().to_vec(),
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn root_handler(State(state): State<ServiceState>) -> Response {
    let listing = Listing::load(&state, BucketPath::root()).await;
    (http::StatusCode::OK, Json(ListResponse::from(listing))).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<ServiceState>,
    Path(bucket_path): Path<String>,
) -> Response {
    let listing = Listing::load(&state, BucketPath::parse(bucket_path)).await;
    (http::StatusCode::OK, Json(ListResponse::from(listing))).into_response()
}
