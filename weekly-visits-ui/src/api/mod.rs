//! API access

pub mod client;

pub use client::{get_api_base, GlooVisitsSource};
