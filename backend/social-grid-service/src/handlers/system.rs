/// System handlers - greeting, diagnostics and schema description
use crate::models::{
    DiagnosticsResponse, Entity, Follow, MessageResponse, Post, Product, Profile, User,
};
use crate::services::collect_diagnostics;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};
use utoipa::PartialSchema;

/// Liveness greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses((status = 200, description = "Service is up", body = MessageResponse))
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Social Grid Backend Ready"))
}

#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "system",
    responses((status = 200, description = "Static greeting", body = MessageResponse))
)]
pub async fn api_hello() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hello from the backend API!"))
}

/// Report database configuration and connectivity; always 200
#[utoipa::path(
    get,
    path = "/test",
    tag = "system",
    responses((status = 200, description = "Diagnostics report", body = DiagnosticsResponse))
)]
pub async fn database_test(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(collect_diagnostics(&state).await)
}

/// JSON schema of every collection, keyed by collection name
#[utoipa::path(
    get,
    path = "/schema",
    tag = "system",
    responses((status = 200, description = "Collection schemas keyed by collection name"))
)]
pub async fn schema() -> HttpResponse {
    let mut schemas = Map::new();
    insert_schema::<Profile>(&mut schemas);
    insert_schema::<Post>(&mut schemas);
    insert_schema::<Follow>(&mut schemas);
    insert_schema::<User>(&mut schemas);
    insert_schema::<Product>(&mut schemas);

    HttpResponse::Ok().json(Value::Object(schemas))
}

fn insert_schema<T: Entity + PartialSchema>(schemas: &mut Map<String, Value>) {
    match serde_json::to_value(T::schema()) {
        Ok(value) => {
            schemas.insert(T::COLLECTION.to_string(), value);
        }
        Err(e) => tracing::error!(collection = T::COLLECTION, "Schema serialization failed: {}", e),
    }
}

/// The OpenAPI document of this service
pub async fn openapi_json(doc: web::Data<utoipa::openapi::OpenApi>) -> HttpResponse {
    HttpResponse::Ok().json(doc.get_ref())
}
