// handlers/mod.rs - Handler tiers
//
// Public (no auth) → Protected (admin session) plus the shared collection
// handlers whose access level is chosen per route.

pub mod collection; // Generic CRUD over content collections
pub mod protected; // Admin gate required
pub mod public; // No authentication required
