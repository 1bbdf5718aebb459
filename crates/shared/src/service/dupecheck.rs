use crate::{
    abstract_trait::{
        auth::DynTokenProvider,
        report::{repository::DynReportRepository, service::DupeCheckServiceTrait},
    },
    domain::{
        requests::{BatchGetRequest, ReportQuery},
        responses::{BatchGetResponse, DupeCheckResponse},
    },
    errors::{ServiceError, format_validation_errors},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub struct DupeCheckService {
    auth: DynTokenProvider,
    report: DynReportRepository,
}

impl DupeCheckService {
    pub fn new(auth: DynTokenProvider, report: DynReportRepository) -> Self {
        Self { auth, report }
    }
}

/// Totals and row counts are compared numerically, so `"0"`, `"00"` and
/// `" 0 "` all mean no transactions. A zero total wins over whatever the
/// rows say.
pub fn has_duplicates(response: &BatchGetResponse) -> Result<bool, ServiceError> {
    let total = response
        .total_value()
        .ok_or_else(|| ServiceError::MalformedResponse("missing totals value".into()))?;

    if parse_count("totals", total)? == 0 {
        return Ok(false);
    }

    let top = response.top_row_value().ok_or_else(|| {
        ServiceError::MalformedResponse("non-zero total but no rows returned".into())
    })?;

    Ok(parse_count("top row", top)? > 1)
}

fn parse_count(field: &str, raw: &str) -> Result<i64, ServiceError> {
    raw.trim().parse::<i64>().map_err(|_| {
        ServiceError::MalformedResponse(format!("{field} value '{raw}' is not an integer"))
    })
}

#[async_trait]
impl DupeCheckServiceTrait for DupeCheckService {
    async fn check(&self, query: &ReportQuery) -> Result<DupeCheckResponse, ServiceError> {
        if let Err(validation_errors) = query.validate() {
            let errors = format_validation_errors(&validation_errors);
            error!("Validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!(
            "🔍 Checking view {} for duplicate transactions | {} → {}",
            query.view_id, query.start_date, query.end_date
        );

        let token = self.auth.access_token().await.map_err(|e| {
            error!("❌ Authentication failed: {e}");
            ServiceError::from(e)
        })?;

        let request = BatchGetRequest::from(query);

        let response = self.report.batch_get(&token, &request).await.map_err(|e| {
            error!("❌ Report request failed for view {}: {e}", query.view_id);
            ServiceError::from(e)
        })?;

        let result = has_duplicates(&response).inspect_err(|e| {
            error!("❌ Unexpected report shape: {e}");
        })?;

        if result {
            warn!(
                "⚠️ Duplicate transactions found in view {} (top id: {})",
                query.view_id,
                response.top_transaction_id().unwrap_or("unknown")
            );
        } else {
            info!("✅ No duplicate transactions in view {}", query.view_id);
        }

        Ok(DupeCheckResponse { result })
    }

    async fn report(&self, query: &ReportQuery) -> Result<String, ServiceError> {
        let response = self.check(query).await?;
        response.to_json().map_err(ServiceError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{auth::TokenProviderTrait, report::repository::ReportRepositoryTrait},
        errors::{AuthError, RequestError},
    };
    use std::sync::{Arc, Mutex};

    fn response(total: &str, top: Option<&str>) -> BatchGetResponse {
        let rows = match top {
            Some(value) => serde_json::json!([
                {"dimensions": ["T-1"], "metrics": [{"values": [value]}]}
            ]),
            None => serde_json::json!([]),
        };
        serde_json::from_value(serde_json::json!({
            "reports": [{"data": {"rows": rows, "totals": [{"values": [total]}]}}]
        }))
        .unwrap()
    }

    struct StaticToken;

    #[async_trait]
    impl TokenProviderTrait for StaticToken {
        async fn access_token(&self) -> Result<String, AuthError> {
            Ok("test-token".to_string())
        }
    }

    struct RejectingToken;

    #[async_trait]
    impl TokenProviderTrait for RejectingToken {
        async fn access_token(&self) -> Result<String, AuthError> {
            Err(AuthError::TokenRejected {
                status: 400,
                body: "invalid_grant".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct CannedReport {
        response: Option<BatchGetResponse>,
        seen: Mutex<Vec<(String, BatchGetRequest)>>,
    }

    #[async_trait]
    impl ReportRepositoryTrait for CannedReport {
        async fn batch_get(
            &self,
            access_token: &str,
            req: &BatchGetRequest,
        ) -> Result<BatchGetResponse, RequestError> {
            self.seen
                .lock()
                .unwrap()
                .push((access_token.to_string(), req.clone()));
            match &self.response {
                Some(response) => Ok(response.clone()),
                None => Err(RequestError::Status {
                    status: 403,
                    body: "User does not have sufficient permissions for this profile.".into(),
                }),
            }
        }
    }

    fn service(report: Arc<CannedReport>) -> DupeCheckService {
        DupeCheckService::new(Arc::new(StaticToken), report)
    }

    #[test]
    fn zero_total_is_never_a_duplicate() {
        assert!(!has_duplicates(&response("0", None)).unwrap());
        assert!(!has_duplicates(&response("0", Some("7"))).unwrap());
    }

    #[test]
    fn single_top_count_is_not_a_duplicate() {
        assert!(!has_duplicates(&response("5", Some("1"))).unwrap());
    }

    #[test]
    fn top_count_above_one_is_a_duplicate() {
        assert!(has_duplicates(&response("5", Some("3"))).unwrap());
    }

    #[test]
    fn totals_are_compared_numerically() {
        assert!(!has_duplicates(&response("00", Some("9"))).unwrap());
    }

    #[test]
    fn non_zero_total_without_rows_is_malformed() {
        let err = has_duplicates(&response("5", None)).unwrap_err();
        assert!(matches!(err, ServiceError::MalformedResponse(_)));
    }

    #[test]
    fn non_numeric_values_are_malformed() {
        assert!(matches!(
            has_duplicates(&response("n/a", None)),
            Err(ServiceError::MalformedResponse(_))
        ));
        assert!(matches!(
            has_duplicates(&response("5", Some("many"))),
            Err(ServiceError::MalformedResponse(_))
        ));
    }

    #[test]
    fn empty_response_is_malformed() {
        assert!(matches!(
            has_duplicates(&BatchGetResponse::default()),
            Err(ServiceError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn report_emits_json_and_sends_fixed_query() {
        let report = Arc::new(CannedReport {
            response: Some(response("5", Some("3"))),
            ..Default::default()
        });
        let query = ReportQuery::new("123456789", "2020-01-01", "2020-09-09");

        let json = service(report.clone()).report(&query).await.unwrap();

        assert_eq!(json, r#"{"result":true}"#);
        let seen = report.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "test-token");
        assert_eq!(seen[0].1, BatchGetRequest::from(&query));
    }

    #[tokio::test]
    async fn auth_failure_skips_report_call() {
        let report = Arc::new(CannedReport::default());
        let service = DupeCheckService::new(Arc::new(RejectingToken), report.clone());
        let query = ReportQuery::new("123456789", "2020-01-01", "2020-09-09");

        let err = service.report(&query).await.unwrap_err();

        assert!(err.is_auth());
        assert!(report.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn request_failure_is_propagated() {
        let report = Arc::new(CannedReport::default());
        let query = ReportQuery::new("123456789", "2020-01-01", "2020-09-09");

        let err = service(report.clone()).check(&query).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Request(RequestError::Status { status: 403, .. })
        ));
        assert_eq!(report.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_view_id_is_rejected_locally() {
        let report = Arc::new(CannedReport::default());
        let query = ReportQuery::new("", "2020-01-01", "2020-09-09");

        let err = service(report.clone()).check(&query).await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(report.seen.lock().unwrap().is_empty());
    }
}
