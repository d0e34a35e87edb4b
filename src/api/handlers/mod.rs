//! HTTP request handlers for API endpoints.

pub mod lookup;
pub mod redirect;
pub mod shorten;

pub use lookup::lookup_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
