// handlers/protected/auth/mod.rs - Session handlers behind the admin gate

pub mod whoami; // GET /auth/whoami

pub use whoami::{whoami_get, SessionInfo};
