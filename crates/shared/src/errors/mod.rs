mod auth;
mod request;
mod service;
mod validate;

pub use self::auth::AuthError;
pub use self::request::RequestError;
pub use self::service::ServiceError;
pub use self::validate::format_validation_errors;
