use crate::{
    domain::{requests::BatchGetRequest, responses::BatchGetResponse},
    errors::RequestError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynReportRepository = Arc<dyn ReportRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ReportRepositoryTrait {
    async fn batch_get(
        &self,
        access_token: &str,
        req: &BatchGetRequest,
    ) -> Result<BatchGetResponse, RequestError>;
}
