use clap::Parser;
use shared::domain::requests::ReportQuery;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dupechecker")]
#[command(about = "Hunt for duplicate transactions in a Google Analytics view")]
pub struct Cli {
    /// Analytics view id, e.g. 123456789
    pub view_id: String,
    /// First day of the range (YYYY-MM-DD, `today`, `7daysAgo`, ...)
    pub start_date: String,
    /// Last day of the range, inclusive
    pub end_date: String,
    /// Service account key file; overrides ANALYTICS_KEY_FILE
    #[arg(long)]
    pub key_file: Option<PathBuf>,
}

impl Cli {
    pub fn query(&self) -> ReportQuery {
        ReportQuery::new(&self.view_id, &self.start_date, &self.end_date)
    }
}
