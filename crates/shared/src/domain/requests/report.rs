use serde::{Deserialize, Serialize};
use validator::Validate;

pub const TRANSACTIONS_METRIC: &str = "ga:transactions";
pub const TRANSACTION_ID_DIMENSION: &str = "ga:transactionId";

/// Parameters of a single duplicate check. Dates are forwarded untouched,
/// so anything the reporting API accepts (`2020-01-01`, `7daysAgo`, `today`)
/// works here too.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ReportQuery {
    #[validate(length(min = 1, message = "view id is required"))]
    pub view_id: String,

    #[validate(length(min = 1, message = "start date is required"))]
    pub start_date: String,

    #[validate(length(min = 1, message = "end date is required"))]
    pub end_date: String,
}

impl ReportQuery {
    pub fn new(
        view_id: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            view_id: view_id.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetRequest {
    pub report_requests: Vec<ReportRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub view_id: String,
    pub date_ranges: Vec<DateRange>,
    pub metrics: Vec<Metric>,
    pub dimensions: Vec<Dimension>,
    pub page_size: u32,
    pub order_bys: Vec<OrderBy>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    pub expression: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dimension {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub field_name: String,
    pub sort_order: String,
}

impl From<&ReportQuery> for BatchGetRequest {
    /// Top transaction id by count, one row only.
    fn from(query: &ReportQuery) -> Self {
        Self {
            report_requests: vec![ReportRequest {
                view_id: query.view_id.clone(),
                date_ranges: vec![DateRange {
                    start_date: query.start_date.clone(),
                    end_date: query.end_date.clone(),
                }],
                metrics: vec![Metric {
                    expression: TRANSACTIONS_METRIC.to_string(),
                }],
                dimensions: vec![Dimension {
                    name: TRANSACTION_ID_DIMENSION.to_string(),
                }],
                page_size: 1,
                order_bys: vec![OrderBy {
                    field_name: TRANSACTIONS_METRIC.to_string(),
                    sort_order: "DESCENDING".to_string(),
                }],
            }],
        }
    }
}
