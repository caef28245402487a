//! HTML template rendering handlers for the web page.

mod index;

pub use index::{IndexQuery, IndexTemplate, index_handler};
