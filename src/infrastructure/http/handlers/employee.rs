//! Employee HTTP Handlers
//!
//! 每个 handler 开启一个请求级事务，调用一次记录操作，成功提交；
//! 任一错误路径上事务随 Drop 回滚。

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::infrastructure::http::dto::{EmployeeRequest, EmployeeResponse, ListEmployeesQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;
use crate::records::manager;

/// 创建员工
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(body): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let mut tx = state.db.begin().await?;
    let employee = manager::create(&mut tx, body.into()).await?;
    tx.commit().await?;

    tracing::info!(
        employee_id = employee.id,
        first_name = %employee.first_name,
        last_name = %employee.last_name,
        "Employee created"
    );

    Ok(Json(employee.into()))
}

/// 分页列出员工
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let mut tx = state.db.begin().await?;
    let employees = manager::list(&mut tx, query.skip, query.limit).await?;
    tx.commit().await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// 按 id 读取员工
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let mut tx = state.db.begin().await?;
    let employee = manager::get(&mut tx, id).await?;
    tx.commit().await?;

    Ok(Json(employee.into()))
}

/// 全量更新员工
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let mut tx = state.db.begin().await?;
    let employee = manager::update(&mut tx, id, body.into()).await?;
    tx.commit().await?;

    tracing::info!(employee_id = employee.id, "Employee updated");

    Ok(Json(employee.into()))
}

/// 删除员工，返回删除前的记录
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let mut tx = state.db.begin().await?;
    let employee = manager::delete(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!(employee_id = employee.id, "Employee deleted");

    Ok(Json(employee.into()))
}
