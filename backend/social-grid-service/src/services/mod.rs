/// Business logic layer for social-grid-service
///
/// Each service wraps the shared document store and performs exactly one
/// store call per operation.
pub mod diagnostics;
pub mod feed;
pub mod posts;
pub mod profiles;

pub use diagnostics::{collect_diagnostics, DatabaseStatus};
pub use feed::{sort_by_created_at_desc, FeedService};
pub use posts::PostService;
pub use profiles::ProfileService;
