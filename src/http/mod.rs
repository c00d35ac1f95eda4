//! HTTP client for the broker REST API.

pub mod client;

pub use client::KubecoinHttp;
