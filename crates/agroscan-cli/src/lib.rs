//! CLI tools for exercising a running AgroScan server.

pub mod client;

pub use client::ApiClient;
