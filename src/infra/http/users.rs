use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::user::{User, UserFields, UserId};
use crate::infra::http::{check_status, join_url, read_json, transport_error};
use crate::usecase::ports::gateway::{GatewayError, UserGateway};

/// `UserGateway` over a JSON REST API exposing `/users`.
#[derive(Debug, Clone)]
pub struct HttpUserGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn users_url(&self) -> String {
        join_url(&self.base_url, "users")
    }

    pub fn user_url(&self, id: UserId) -> String {
        join_url(&self.base_url, &format!("users/{id}"))
    }
}

#[async_trait(?Send)]
impl UserGateway for HttpUserGateway {
    async fn list_users(&self) -> Result<Vec<User>, GatewayError> {
        let url = self.users_url();
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| transport_error(&url, err))?;
        read_json(&url, response).await
    }

    async fn create_user(&self, fields: &UserFields) -> Result<User, GatewayError> {
        let url = self.users_url();
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(fields)
            .send()
            .await
            .map_err(|err| transport_error(&url, err))?;
        read_json(&url, response).await
    }

    async fn update_user(&self, id: UserId, fields: &UserFields) -> Result<User, GatewayError> {
        let url = self.user_url(id);
        debug!(%url, "PUT");
        let response = self
            .client
            .put(&url)
            .json(fields)
            .send()
            .await
            .map_err(|err| transport_error(&url, err))?;
        read_json(&url, response).await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), GatewayError> {
        let url = self.user_url(id);
        debug!(%url, "DELETE");
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|err| transport_error(&url, err))?;
        check_status(&url, response).map(|_| ())
    }
}
