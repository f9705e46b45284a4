use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::instrument;

use common::prelude::{Breadcrumb, BucketPath};

use crate::http_server::listing::Listing;
use crate::ServiceState;

#[derive(Template)]
#[template(path = "pages/buckets.html")]
pub struct BucketsTemplate {
    pub bucket_path: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub error: Option<String>,
    pub rows: Vec<BucketRow>,
}

#[derive(Debug, Clone)]
pub struct BucketRow {
    pub key: String,
    pub value: String,
    pub is_nested: bool,
    pub link: String,
}

impl From<&Listing> for BucketsTemplate {
    fn from(listing: &Listing) -> Self {
        let rows = listing
            .details()
            .iter()
            .map(|detail| BucketRow {
                key: detail.key.clone(),
                value: detail.value.clone(),
                is_nested: detail.is_nested,
                link: listing.path.child_link(&detail.key),
            })
            .collect();

        Self {
            bucket_path: listing.path.to_string(),
            breadcrumbs: listing.path.breadcrumbs(),
            error: listing.error_message(),
            rows,
        }
    }
}

#[instrument(skip(state))]
pub async fn root_handler(State(state): State<ServiceState>) -> Response {
    render(&Listing::load(&state, BucketPath::root()).await)
}

#[instrument(skip(state))]
pub async fn handler(
    State(state): State<ServiceState>,
    Path(bucket_path): Path<String>,
) -> Response {
    render(&Listing::load(&state, BucketPath::parse(bucket_path)).await)
}

/// Logical failures are part of the page and still answer 200; only a
/// failure to render the page itself is a 500.
fn render(listing: &Listing) -> Response {
    match BucketsTemplate::from(listing).render() {
        Ok(body) => (StatusCode::OK, Html(body)).into_response(),
        Err(e) => {
            tracing::error!("failed to render bucket page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
