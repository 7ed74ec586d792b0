pub mod auth;
pub mod guard;
pub mod response;

pub use auth::{require_identity, resolve_identity};
pub use guard::portal_guard;
pub use response::ApiResponse;
