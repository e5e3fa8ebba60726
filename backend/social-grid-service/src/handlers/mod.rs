/// HTTP handlers for social-grid-service
///
/// This module contains handlers for:
/// - System: greeting, hello, database diagnostics and schema description
/// - Profiles: profile listing
/// - Feed: latest posts, newest first
/// - Posts: post creation
pub mod feed;
pub mod posts;
pub mod profiles;
pub mod system;

pub use feed::get_feed;
pub use posts::create_post;
pub use profiles::list_profiles;
pub use system::{api_hello, database_test, openapi_json, root, schema};
