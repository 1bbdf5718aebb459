mod report;

pub use self::report::{
    BatchGetRequest, DateRange, Dimension, Metric, OrderBy, ReportQuery, ReportRequest,
};
