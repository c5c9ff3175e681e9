use super::{
    client::{path_segment, ApiClient},
    types::{ApiError, Employee, EmployeeDraft},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/api/employees").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::decode(response).await
    }

    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee, ApiError> {
        let url = self.endpoint("/api/employees").await;
        let response = self.send(self.http_client().post(url).json(draft)).await?;
        Self::decode(response).await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/api/employees/{}", path_segment(employee_id)))
            .await;
        let response = self.send(self.http_client().delete(url)).await?;
        Self::expect_success(response).await
    }
}
