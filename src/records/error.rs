//! Employee Record Manager - 错误定义

use thiserror::Error;

/// 记录操作的两类业务错误
///
/// 存储层故障不在此层建模，原样向上传播，由 HTTP 层折算为
/// 通用服务器错误。
#[derive(Debug, Error)]
pub enum RecordError {
    /// 引用的 id 不存在
    #[error("employee {0} not found")]
    NotFound(i64),

    /// 姓名对已被另一条活跃记录占用
    #[error("employee {first_name} {last_name} already exists")]
    Conflict {
        first_name: String,
        last_name: String,
    },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl RecordError {
    /// 写入失败时的归类：唯一索引违反折算为 Conflict
    ///
    /// 应用层的预检查与写入不是原子的，并发写入同名记录时
    /// 由存储层唯一索引兜底。
    pub(crate) fn from_write_error(err: sqlx::Error, first_name: &str, last_name: &str) -> Self {
        match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => Self::Conflict {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            },
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RecordError::NotFound(42);
        assert_eq!(err.to_string(), "employee 42 not found");

        let err = RecordError::Conflict {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        assert_eq!(err.to_string(), "employee Ada Lovelace already exists");
    }

    #[test]
    fn test_non_unique_write_error_stays_database() {
        let err = RecordError::from_write_error(sqlx::Error::PoolClosed, "Ada", "Lovelace");
        assert!(matches!(err, RecordError::Database(_)));
    }
}
