//! HTTP client for the departments endpoint

use async_trait::async_trait;
use contracts::domain::a025_department::aggregate::{Department, UpdateDepartmentDto};

use super::ui::details::DepartmentGateway;
use crate::shared::api_utils::{get_json, put_json, resource_url};
use crate::shared::config::DEPARTMENTS_ENDPOINT;

/// Fetch a department by ID
pub async fn view_department(id: &str) -> Result<Department, String> {
    get_json(&resource_url(DEPARTMENTS_ENDPOINT, id)).await
}

/// Replace the editable fields of a department
pub async fn update_department(id: &str, payload: &UpdateDepartmentDto) -> Result<(), String> {
    put_json(&resource_url(DEPARTMENTS_ENDPOINT, id), payload).await
}

/// [`DepartmentGateway`] backed by the REST API
pub struct HttpDepartmentGateway;

#[async_trait(?Send)]
impl DepartmentGateway for HttpDepartmentGateway {
    async fn view_department(&self, id: &str) -> Result<Department, String> {
        view_department(id).await
    }

    async fn update_department(
        &self,
        id: &str,
        payload: &UpdateDepartmentDto,
    ) -> Result<(), String> {
        update_department(id, payload).await
    }
}
