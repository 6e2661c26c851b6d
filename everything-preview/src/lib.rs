//! OpenGraph-backed [`LinkPreviewSource`](everything_model::LinkPreviewSource).
//!
//! [`OpenGraphClient`] fetches a page over HTTP and reads its `og:` meta tags;
//! [`extract_link_preview`] does the parsing and can be used on its own.

mod client;
mod config;
mod extract;

pub use client::OpenGraphClient;
pub use config::OpenGraphConfig;
pub use extract::extract_link_preview;
