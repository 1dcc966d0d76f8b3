//! SQLite Persistence - SQLite 数据库持久化实现

mod database;

pub use database::*;
