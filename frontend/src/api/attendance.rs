use super::{
    client::{path_segment, ApiClient},
    types::{
        ApiError, AttendanceDraft, AttendanceFilter, AttendanceRecord, EmployeeAttendanceSummary,
    },
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint("/api/attendance").await;
        let params = filter.query_params();
        let mut request = self.http_client().get(url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    pub async fn create_attendance(
        &self,
        draft: &AttendanceDraft,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint("/api/attendance").await;
        let response = self.send(self.http_client().post(url).json(draft)).await?;
        Self::decode(response).await
    }

    pub async fn get_employee_summary(
        &self,
        employee_id: &str,
    ) -> Result<EmployeeAttendanceSummary, ApiError> {
        let url = self
            .endpoint(&format!(
                "/api/attendance/summary/{}",
                path_segment(employee_id)
            ))
            .await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::decode(response).await
    }
}
