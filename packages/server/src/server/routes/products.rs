//! Product tracking and query endpoints.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use url::Url;
use uuid::Uuid;

use extraction::ExtractError;

use crate::domains::products::{PriceHistory, Product};
use crate::kernel::FetchError;
use crate::server::app::AppState;

/// The one retailer whose pages the extraction engine understands.
/// Everything else is rejected before any fetch is attempted.
const SUPPORTED_HOST: &str = "amazon.com";

#[derive(Deserialize)]
pub struct TrackProductRequest {
    pub url: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Deserialize)]
pub struct HistoryParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// API error surface. Fetch failures and extraction failures map to
/// distinct statuses so clients can tell them apart.
pub enum ApiError {
    UnsupportedUrl(String),
    Extraction(ExtractError),
    Fetch(FetchError),
    NotFound,
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::UnsupportedUrl(url) => (
                StatusCode::BAD_REQUEST,
                format!("unsupported product URL: {}", url),
            ),
            ApiError::Extraction(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            ApiError::Fetch(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "product not found".to_string()),
            ApiError::Internal(err) => {
                error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Track a product: fetch its page, extract name and price, then create
/// the product or record a fresh observation on the existing one.
pub async fn track_product_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<TrackProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let url = request.url.trim();
    if !is_supported_url(url) {
        return Err(ApiError::UnsupportedUrl(url.to_string()));
    }

    info!(url = %url, "tracking product");

    let html = state.fetcher.fetch(url).await.map_err(ApiError::Fetch)?;
    let product_info = extraction::extract(&html, url).map_err(ApiError::Extraction)?;

    let product = match Product::find_by_url(url, &state.db_pool).await? {
        Some(existing) => {
            existing
                .record_price(product_info.price, &product_info.currency, &state.db_pool)
                .await?
        }
        None => {
            Product::create(
                url,
                &product_info.name,
                product_info.price,
                &product_info.currency,
                &product_info.retailer,
                &state.db_pool,
            )
            .await?
        }
    };

    Ok(Json(product))
}

pub async fn list_products_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = Product::list(params.limit, params.offset, &state.db_pool).await?;
    Ok(Json(products))
}

pub async fn get_product_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    match Product::find_by_id(id, &state.db_pool).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn price_history_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<PriceHistory>>, ApiError> {
    if Product::find_by_id(id, &state.db_pool).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    let history = PriceHistory::for_product(id, params.limit, &state.db_pool).await?;
    Ok(Json(history))
}

pub async fn delete_product_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if Product::delete(id, &state.db_pool).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// URL precondition: must parse, be http(s), and belong to the supported
/// retailer's domain.
fn is_supported_url(url: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }

    match parsed.host_str() {
        Some(host) => host == SUPPORTED_HOST || host.ends_with(".amazon.com"),
        None => false,
    }
}
