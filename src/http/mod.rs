//! HTTP client module
//!
//! Provides the HTTP client with retry and backoff strategies.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Retry-After**: 429 responses wait as long as the server asks
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//!
//! Retrying lives here, underneath the page source. The collector itself
//! never retries a page.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
