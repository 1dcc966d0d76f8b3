//! Employee Record - 实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 员工记录
///
/// 不变量:
/// - `id` 由存储层分配，创建后不可变
/// - 活跃记录的 (first_name, last_name) 组合唯一
/// - `modified_at` 在每次变更（含创建）时刷新
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Employee {
    /// 姓名对是否与给定值一致
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

/// 创建/更新时由调用方提供的字段
///
/// salary 以整数接收、以浮点落库，沿用对外 API 的既有约定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub salary: i64,
}
