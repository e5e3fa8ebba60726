/// Post handlers - HTTP endpoints for post creation
use crate::error::{AppError, Result};
use crate::metrics::POSTS_CREATED_TOTAL;
use crate::models::{CreatePostRequest, CreatedResponse};
use crate::services::PostService;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Create a post with zero likes
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Post stored", body = CreatedResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Payload failed validation"),
        (status = 500, description = "Store unavailable or insert failed")
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();

    // Rejected payloads never reach the store
    if let Err(e) = req.validate() {
        POSTS_CREATED_TOTAL.with_label_values(&["rejected"]).inc();
        return Err(AppError::from(e));
    }

    let result = match state.database.store() {
        Ok(store) => PostService::new(store).create(req).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(id) => {
            POSTS_CREATED_TOTAL.with_label_values(&["created"]).inc();
            Ok(HttpResponse::Ok().json(CreatedResponse { id: id.to_string() }))
        }
        Err(e) => {
            POSTS_CREATED_TOTAL.with_label_values(&["failed"]).inc();
            tracing::error!("Post creation failed: {}", e);
            Err(e)
        }
    }
}
