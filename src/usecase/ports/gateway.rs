use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::user::{User, UserFields, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unreadable response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Remote store of user records.
///
/// Futures are not required to be `Send`: the browser client is
/// single-threaded and its futures are not.
#[async_trait(?Send)]
pub trait UserGateway {
    async fn list_users(&self) -> Result<Vec<User>, GatewayError>;
    async fn create_user(&self, fields: &UserFields) -> Result<User, GatewayError>;
    async fn update_user(&self, id: UserId, fields: &UserFields) -> Result<User, GatewayError>;
    async fn delete_user(&self, id: UserId) -> Result<(), GatewayError>;
}
