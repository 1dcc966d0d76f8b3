//! Infrastructure Layer
//!
//! - HTTP: axum RESTful API
//! - Persistence: SQLite 存储

pub mod http;
pub mod persistence;
