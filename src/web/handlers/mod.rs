//! Template rendering handlers.

pub mod index;
pub mod not_found;

pub use index::index_handler;
pub use not_found::fallback_handler;
