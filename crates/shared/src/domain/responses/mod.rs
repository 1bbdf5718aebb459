mod auth;
mod dupecheck;
mod report;

pub use self::auth::TokenResponse;
pub use self::dupecheck::DupeCheckResponse;
pub use self::report::{BatchGetResponse, DateRangeValues, Report, ReportData, ReportRow};
