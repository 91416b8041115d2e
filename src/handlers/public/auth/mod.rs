// handlers/public/auth/mod.rs - Public authentication handlers
//
// Token acquisition. The only credential is the configured admin pair.

pub mod login; // POST /auth/login - authenticate and get JWT

pub use login::{login_post, LoginRequest, LoginResponse};
