/// Feed handlers - latest posts, newest first
use crate::error::Result;
use crate::metrics::FEED_REQUESTS_TOTAL;
use crate::models::{ItemsResponse, LimitQuery};
use crate::normalize::normalize_documents;
use crate::services::FeedService;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/api/feed",
    tag = "feed",
    params(LimitQuery),
    responses(
        (status = 200, description = "Posts ordered by created_at, newest first", body = ItemsResponse),
        (status = 422, description = "Invalid limit"),
        (status = 500, description = "Store unavailable or read failed")
    )
)]
pub async fn get_feed(
    state: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    FEED_REQUESTS_TOTAL.inc();

    let limit = query.resolve(state.config.listing.default_limit)?;
    let service = FeedService::new(state.database.store()?);

    let posts = service.latest(limit).await?;
    tracing::debug!(limit, returned = posts.len(), "feed served");

    Ok(HttpResponse::Ok().json(ItemsResponse {
        items: normalize_documents(posts),
    }))
}
