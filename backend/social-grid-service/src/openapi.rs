/// OpenAPI documentation for Social Grid Service
use crate::handlers;
use crate::models::{
    CreatePostRequest, CreatedResponse, DiagnosticsResponse, Follow, ItemsResponse,
    MessageResponse, Post, Product, Profile, User,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Grid Service API",
        version = "0.1.0",
        description = "Backend for a minimal social grid: profiles, a post feed ordered newest first, post creation, and database diagnostics over a schemaless document store.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Development server"),
    ),
    paths(
        handlers::system::root,
        handlers::system::api_hello,
        handlers::system::database_test,
        handlers::system::schema,
        handlers::profiles::list_profiles,
        handlers::feed::get_feed,
        handlers::posts::create_post,
    ),
    components(schemas(
        Profile,
        Post,
        Follow,
        User,
        Product,
        CreatePostRequest,
        CreatedResponse,
        ItemsResponse,
        MessageResponse,
        DiagnosticsResponse,
    )),
    tags(
        (name = "system", description = "Greeting, diagnostics and schema description"),
        (name = "profiles", description = "Profile listing"),
        (name = "feed", description = "Latest posts, newest first"),
        (name = "posts", description = "Post creation"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/openapi.json"
    }
}
