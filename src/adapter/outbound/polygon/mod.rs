//! Polygon.io news adapter.

mod client;
mod dto;

pub use client::{PolygonNews, API_KEY_ENV};
