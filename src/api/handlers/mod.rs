//! HTTP request handlers for JSON and redirect endpoints.

pub mod health;
pub mod redirect;
pub mod urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use urls::url_index_handler;
