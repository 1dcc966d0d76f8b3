//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{Employee, NewEmployee};

/// 创建/更新员工的请求体
///
/// POST 与 PUT 共用同一结构：三个字段全部必填，更新即全量替换，
/// 不支持部分更新。salary 按对外 API 约定以整数接收。
#[derive(Debug, Deserialize)]
pub struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub salary: i64,
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(req: EmployeeRequest) -> Self {
        NewEmployee {
            first_name: req.first_name,
            last_name: req.last_name,
            salary: req.salary,
        }
    }
}

/// 分页查询参数，缺省 skip=0 / limit=100
#[derive(Debug, Deserialize)]
pub struct ListEmployeesQuery {
    #[serde(default)]
    pub skip: usize,

    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    100
}

/// 员工记录响应，时间戳序列化为 RFC 3339
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            salary: e.salary,
            created_at: e.created_at,
            modified_at: e.modified_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query: ListEmployeesQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 100);
    }

    #[test]
    fn test_employee_request_rejects_missing_field() {
        let result: Result<EmployeeRequest, _> =
            serde_json::from_str(r#"{"first_name": "Ada", "last_name": "Lovelace"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_serializes_rfc3339_timestamps() {
        let response = EmployeeResponse {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            salary: 5000.0,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            modified_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");
        assert_eq!(json["salary"], 5000.0);
    }
}
