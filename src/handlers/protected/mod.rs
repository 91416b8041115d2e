// handlers/protected/mod.rs - Handlers that only make sense with an admin session
//
// Routes here are always mounted behind `admin_gate`, which places an
// `AdminSession` in the request extensions.

pub mod auth;
