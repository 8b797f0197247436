//! Template fetching from remote sources.
//!
//! This module provides the blocking HTTP client used by the remote
//! repository provider.

pub mod http;

pub use http::HttpFetcher;
