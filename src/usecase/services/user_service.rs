use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::entities::user::{User, UserFields, UserId};
use crate::domain::view::pending::MutationKey;
use crate::usecase::errors::{FetchError, MutationAction, MutationError};
use crate::usecase::ports::gateway::{GatewayError, UserGateway};

pub struct UserService {
    gateway: Arc<dyn UserGateway>,
}

impl UserService {
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }

    pub async fn fetch_all(&self) -> Result<Vec<User>, FetchError> {
        match self.gateway.list_users().await {
            Ok(users) => {
                info!(count = users.len(), "fetched users");
                Ok(users)
            }
            Err(err) => {
                error!(error = %err, "failed to fetch users");
                Err(FetchError(err))
            }
        }
    }

    pub async fn create(&self, fields: &UserFields) -> Result<User, MutationError> {
        debug!(name = %fields.name, "creating user");
        self.gateway
            .create_user(fields)
            .await
            .map_err(|err| rejected(MutationAction::Create, MutationKey::Create, err))
    }

    pub async fn update(&self, id: UserId, fields: &UserFields) -> Result<User, MutationError> {
        debug!(%id, "updating user");
        self.gateway
            .update_user(id, fields)
            .await
            .map_err(|err| rejected(MutationAction::Update, MutationKey::Record(id), err))
    }

    pub async fn delete(&self, id: UserId) -> Result<(), MutationError> {
        debug!(%id, "deleting user");
        self.gateway
            .delete_user(id)
            .await
            .map_err(|err| rejected(MutationAction::Delete, MutationKey::Record(id), err))
    }
}

fn rejected(action: MutationAction, target: MutationKey, source: GatewayError) -> MutationError {
    error!(%action, %target, error = %source, "user mutation failed");
    MutationError::Rejected {
        action,
        target,
        source,
    }
}
