pub mod extract;

pub use extract::{DocumentId, JsonBody};
