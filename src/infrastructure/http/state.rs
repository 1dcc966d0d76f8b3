//! Application State
//!
//! 显式的存储句柄对象：连接池在 main 中创建一次，经由 AppState
//! 注入各 handler，不使用模块级全局状态。

use crate::infrastructure::persistence::sqlite::DbPool;

/// 应用状态
///
/// 每个 handler 从 `db` 开启一个请求级事务，调用一次记录操作，
/// 成功则提交，失败则随 Drop 回滚。
pub struct AppState {
    pub db: DbPool,
}

impl AppState {
    /// 创建应用状态
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}
