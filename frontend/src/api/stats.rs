use super::{
    client::ApiClient,
    types::{ApiError, StatsSummary, TodayStats},
};

impl ApiClient {
    pub async fn get_stats(&self) -> Result<StatsSummary, ApiError> {
        let url = self.endpoint("/api/stats").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::decode(response).await
    }

    pub async fn get_today_stats(&self) -> Result<TodayStats, ApiError> {
        let url = self.endpoint("/api/stats/today").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::decode(response).await
    }
}
