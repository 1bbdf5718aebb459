use crate::errors::AuthError;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTokenProvider = Arc<dyn TokenProviderTrait + Send + Sync>;

#[async_trait]
pub trait TokenProviderTrait {
    async fn access_token(&self) -> Result<String, AuthError>;
}
