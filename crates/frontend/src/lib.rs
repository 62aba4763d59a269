//! HTML frontend for the posts API.
//!
//! Holds no data: every page load and form submission becomes one HTTP call
//! to the API service, followed by a render or a redirect.

pub mod client;
pub mod errors;
pub mod routes;
pub mod startup;
pub mod views;

pub use startup::run;
