//! Browser-facing page layer.
//!
//! Renders the postcode form, the severity banner and the site lists with
//! Askama templates. No client-side script is involved: the form submits
//! with `GET /?postcode=...` and the result is rendered on the server.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
