//! Roster - 员工记录服务
//!
//! 架构分层:
//!
//! 核心层 (records/):
//! - Employee Record Manager: 员工记录的校验与变更（唯一的业务逻辑）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum RESTful API（路由、DTO、错误映射、中间件）
//! - Persistence: SQLite 连接池与 schema 迁移
//!
//! 配置层 (config/):
//! - 多源配置加载（环境变量 > 配置文件 > 默认值）

pub mod config;
pub mod infrastructure;
pub mod records;

pub use config::{load_config, AppConfig};
