use crate::{
    abstract_trait::report::repository::ReportRepositoryTrait,
    domain::{requests::BatchGetRequest, responses::BatchGetResponse},
    errors::RequestError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct AnalyticsReportRepository {
    http: reqwest::Client,
    url: String,
}

impl AnalyticsReportRepository {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ReportRepositoryTrait for AnalyticsReportRepository {
    async fn batch_get(
        &self,
        access_token: &str,
        req: &BatchGetRequest,
    ) -> Result<BatchGetResponse, RequestError> {
        info!(
            "📊 Requesting {} report(s) from {}",
            req.report_requests.len(),
            self.url
        );

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(access_token)
            .json(req)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Reporting API unreachable: {e:?}");
                RequestError::from(e)
            })?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            error!("❌ Reporting API returned {status}: {body}");
            return Err(RequestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let report: BatchGetResponse = serde_json::from_slice(&body).map_err(|e| {
            error!("❌ Failed to decode report response: {e}");
            RequestError::from(e)
        })?;

        info!("✅ Received {} report(s)", report.reports.len());

        Ok(report)
    }
}
