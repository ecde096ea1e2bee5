// Categorization analytics over user-sorted bins. Pure computation, no I/O.

pub mod analytics;
pub mod handlers;
