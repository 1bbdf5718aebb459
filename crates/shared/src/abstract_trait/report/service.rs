use crate::{
    domain::{requests::ReportQuery, responses::DupeCheckResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynDupeCheckService = Arc<dyn DupeCheckServiceTrait + Send + Sync>;

#[async_trait]
pub trait DupeCheckServiceTrait {
    async fn check(&self, query: &ReportQuery) -> Result<DupeCheckResponse, ServiceError>;
    async fn report(&self, query: &ReportQuery) -> Result<String, ServiceError>;
}
