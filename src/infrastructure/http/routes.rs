//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /employee/        POST    创建员工（姓名对重复返回 400）
//! - /employee/        GET     分页列出员工（query: skip, limit）
//! - /employee/{id}    GET     按 id 读取员工
//! - /employee/{id}    PUT     全量更新员工
//! - /employee/{id}    DELETE  删除员工并返回删除前的记录
//! - /ping             GET     健康检查（含数据库探测）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(employee_routes())
}

/// Employee 路由
fn employee_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/employee/",
            post(handlers::create_employee).get(handlers::list_employees),
        )
        .route(
            "/employee/:id",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
}
