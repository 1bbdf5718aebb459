use shared::{
    abstract_trait::{
        auth::DynTokenProvider,
        report::{repository::DynReportRepository, service::DynDupeCheckService},
    },
    config::AnalyticsConfig,
    repository::report::AnalyticsReportRepository,
    service::{auth::ServiceAccountTokenProvider, dupecheck::DupeCheckService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub dupecheck_service: DynDupeCheckService,
}

impl DependenciesInject {
    pub fn new(config: &AnalyticsConfig, http: reqwest::Client) -> Self {
        let token_provider = Arc::new(ServiceAccountTokenProvider::new(
            http.clone(),
            config.key_file.clone(),
            config.scope(),
        )) as DynTokenProvider;

        let report_repo = Arc::new(AnalyticsReportRepository::new(
            http,
            config.reporting_url.clone(),
        )) as DynReportRepository;

        let dupecheck_service =
            Arc::new(DupeCheckService::new(token_provider, report_repo)) as DynDupeCheckService;

        Self { dupecheck_service }
    }
}
