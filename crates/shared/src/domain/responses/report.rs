use serde::{Deserialize, Serialize};

/// Subset of the `reports:batchGet` response that the duplicate check reads.
/// Every metric value arrives as a string.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BatchGetResponse {
    #[serde(default)]
    pub reports: Vec<Report>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Report {
    #[serde(default)]
    pub data: ReportData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportData {
    #[serde(default)]
    pub rows: Vec<ReportRow>,
    #[serde(default)]
    pub totals: Vec<DateRangeValues>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportRow {
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<DateRangeValues>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DateRangeValues {
    #[serde(default)]
    pub values: Vec<String>,
}

impl BatchGetResponse {
    fn data(&self) -> Option<&ReportData> {
        self.reports.first().map(|report| &report.data)
    }

    /// `reports[0].data.totals[0].values[0]`
    pub fn total_value(&self) -> Option<&str> {
        self.data()?
            .totals
            .first()?
            .values
            .first()
            .map(String::as_str)
    }

    /// `reports[0].data.rows[0].metrics[0].values[0]`
    pub fn top_row_value(&self) -> Option<&str> {
        self.data()?
            .rows
            .first()?
            .metrics
            .first()?
            .values
            .first()
            .map(String::as_str)
    }

    pub fn top_transaction_id(&self) -> Option<&str> {
        self.data()?
            .rows
            .first()?
            .dimensions
            .first()
            .map(String::as_str)
    }
}
