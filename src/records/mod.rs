//! Employee Record Manager
//!
//! 员工记录的业务核心：
//! - 实体: Employee / NewEmployee
//! - 操作: list / get / create / update / delete
//! - 错误: NotFound / Conflict（仅此两类业务错误）
//!
//! 请求解析与响应序列化属于 HTTP 层，存储事务由调用方开启并传入。

mod employee;
mod error;
pub mod manager;

pub use employee::{Employee, NewEmployee};
pub use error::RecordError;
