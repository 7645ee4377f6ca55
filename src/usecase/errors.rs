use std::fmt;

use thiserror::Error;

use crate::domain::view::list_view::ReconcileError;
use crate::domain::view::pending::MutationKey;
use crate::usecase::ports::gateway::GatewayError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load users: {0}")]
pub struct FetchError(#[from] pub GatewayError);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAction {
    Create,
    Update,
    Delete,
}

impl fmt::Display for MutationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            MutationAction::Create => "create",
            MutationAction::Update => "update",
            MutationAction::Delete => "delete",
        };
        f.write_str(verb)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("could not {action} {target}: {source}")]
    Rejected {
        action: MutationAction,
        target: MutationKey,
        source: GatewayError,
    },
    #[error(transparent)]
    Conflict(#[from] ReconcileError),
    #[error("{0} already has a request in flight")]
    AlreadyPending(MutationKey),
}
