//! Employee Record Manager
//!
//! 员工记录的唯一修改入口。每个操作接收调用方提供的事务/连接
//! 句柄，自身不持有任何存储状态，也没有跨请求缓存。

use chrono::Utc;
use sqlx::SqliteConnection;

use super::{Employee, NewEmployee, RecordError};

/// 分页读取员工记录（存储默认顺序，不保证排序）
///
/// 越界时返回空序列，不报错。
pub async fn list(
    conn: &mut SqliteConnection,
    skip: usize,
    limit: usize,
) -> Result<Vec<Employee>, RecordError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, salary, created_at, modified_at FROM employee LIMIT ? OFFSET ?",
    )
    .bind(limit as i64)
    .bind(skip as i64)
    .fetch_all(conn)
    .await?;

    Ok(employees)
}

/// 按 id 读取单条记录
pub async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Employee, RecordError> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, salary, created_at, modified_at FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    employee.ok_or(RecordError::NotFound(id))
}

/// 创建新记录
///
/// 姓名对已存在时拒绝。创建时间与修改时间同时落为当前时刻，
/// 返回含存储层分配字段的完整记录。
pub async fn create(
    conn: &mut SqliteConnection,
    new: NewEmployee,
) -> Result<Employee, RecordError> {
    if find_by_name(&mut *conn, &new.first_name, &new.last_name)
        .await?
        .is_some()
    {
        return Err(RecordError::Conflict {
            first_name: new.first_name,
            last_name: new.last_name,
        });
    }

    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO employee (first_name, last_name, salary, created_at, modified_at) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(new.salary as f64)
    .bind(now)
    .bind(now)
    .execute(&mut *conn)
    .await
    .map_err(|e| RecordError::from_write_error(e, &new.first_name, &new.last_name))?;

    get(conn, result.last_insert_rowid()).await
}

/// 全量替换 id 对应记录的三个可变字段（不支持部分更新）
///
/// 姓名对发生变化时重做与 create 相同的冲突检查；被更新记录
/// 自身的旧姓名不构成冲突。
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    new: NewEmployee,
) -> Result<Employee, RecordError> {
    let current = get(&mut *conn, id).await?;

    if !current.has_name(&new.first_name, &new.last_name)
        && find_by_name(&mut *conn, &new.first_name, &new.last_name)
            .await?
            .is_some()
    {
        return Err(RecordError::Conflict {
            first_name: new.first_name,
            last_name: new.last_name,
        });
    }

    sqlx::query(
        "UPDATE employee SET first_name = ?, last_name = ?, salary = ?, modified_at = ? \
         WHERE id = ?",
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(new.salary as f64)
    .bind(Utc::now())
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(|e| RecordError::from_write_error(e, &new.first_name, &new.last_name))?;

    get(conn, id).await
}

/// 删除记录并返回删除前的值（硬删除，无墓碑）
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<Employee, RecordError> {
    let employee = get(&mut *conn, id).await?;

    sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(employee)
}

/// 按姓名对查找活跃记录
async fn find_by_name(
    conn: &mut SqliteConnection,
    first_name: &str,
    last_name: &str,
) -> Result<Option<Employee>, RecordError> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, salary, created_at, modified_at FROM employee WHERE first_name = ? AND last_name = ?",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_optional(conn)
    .await?;

    Ok(employee)
}
