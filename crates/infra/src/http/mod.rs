//! HTTP client used by the SOAP transport

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
