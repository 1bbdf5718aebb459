mod credentials;
mod http;
mod myconfig;

pub use self::credentials::ServiceAccountKey;
pub use self::http::HttpClient;
pub use self::myconfig::{
    AnalyticsConfig, Config, DEFAULT_KEY_FILE, DEFAULT_REPORTING_URL, DEFAULT_SCOPE,
};
