pub mod auth;
pub mod response;

pub use auth::{admin_gate, authorize, AdminSession, Authorization};
pub use response::{ApiResponse, ApiResult};
