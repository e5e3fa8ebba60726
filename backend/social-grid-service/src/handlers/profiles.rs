/// Profile handlers - HTTP endpoints for profile listing
use crate::error::Result;
use crate::models::{ItemsResponse, LimitQuery};
use crate::normalize::normalize_documents;
use crate::services::ProfileService;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// List profiles in store order
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = "profiles",
    params(LimitQuery),
    responses(
        (status = 200, description = "Profiles", body = ItemsResponse),
        (status = 422, description = "Invalid limit"),
        (status = 500, description = "Store unavailable or read failed")
    )
)]
pub async fn list_profiles(
    state: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    let limit = query.resolve(state.config.listing.default_limit)?;
    let service = ProfileService::new(state.database.store()?);

    let profiles = service.list(limit).await?;

    Ok(HttpResponse::Ok().json(ItemsResponse {
        items: normalize_documents(profiles),
    }))
}
