use tracing::{info, warn};

use crate::domain::entities::user::{User, UserFields, UserId};
use crate::domain::view::form::FormMode;
use crate::domain::view::list_view::{ReconcileError, UserListView};
use crate::domain::view::page::UsersPage;
use crate::domain::view::pending::MutationKey;
use crate::usecase::errors::{FetchError, MutationError};
use crate::usecase::services::user_service::UserService;

/// Short-lived access to the users page.
///
/// Borrows never span an await: each flow below reads or writes the page,
/// sends its request, then takes the page again to merge the answer.
pub trait PageHandle {
    fn with_page<R>(&mut self, f: impl FnOnce(&mut UsersPage) -> R) -> R;
}

impl PageHandle for UsersPage {
    fn with_page<R>(&mut self, f: impl FnOnce(&mut UsersPage) -> R) -> R {
        f(self)
    }
}

/// Replaces the collection with the API's. Returns the number of users now held.
pub async fn load(service: &UserService, page: &mut impl PageHandle) -> Result<usize, FetchError> {
    page.with_page(|page| page.loading = true);
    let outcome = match service.fetch_all().await {
        Ok(users) => Ok(page.with_page(|page| merge_loaded(&mut page.view, users))),
        Err(err) => Err(err),
    };
    page.with_page(|page| {
        page.loading = false;
        match &outcome {
            Ok(count) => page.report(format!("Loaded {count} users"), false),
            Err(err) => page.report(err.to_string(), true),
        }
    });
    outcome
}

/// Sends the open dialog as a create or an update. The dialog closes on
/// success unless the user switched it meanwhile.
pub async fn submit(service: &UserService, page: &mut impl PageHandle) -> Result<(), MutationError> {
    let open = page.with_page(|page| {
        let fields = page.form.clone();
        page.submit_key().map(|key| (page.mode, key, fields))
    });
    let Some((mode, key, fields)) = open else {
        return Ok(());
    };
    page.with_page(|page| begin(page, key))?;

    let outcome = match mode {
        FormMode::Editing(id) => update_user(service, page, id, &fields)
            .await
            .map(|()| format!("Updated user {id}")),
        _ => create_user(service, page, &fields)
            .await
            .map(|id| format!("Added user {id}")),
    };

    page.with_page(|page| {
        page.pending.finish(key);
        match &outcome {
            Ok(message) => {
                page.report(message.as_str(), false);
                if page.mode == mode {
                    page.close_form();
                }
            }
            Err(err) => page.report(err.to_string(), true),
        }
    });
    outcome.map(|_| ())
}

/// Deletes one user and closes the dialog if it was editing that user.
pub async fn delete(
    service: &UserService,
    page: &mut impl PageHandle,
    id: UserId,
) -> Result<User, MutationError> {
    let key = MutationKey::Record(id);
    page.with_page(|page| begin(page, key))?;

    let outcome = delete_user(service, page, id).await;

    page.with_page(|page| {
        page.pending.finish(key);
        match &outcome {
            Ok(removed) => {
                if page.mode == FormMode::Editing(id) {
                    page.close_form();
                }
                page.report(format!("Deleted {}", removed.name), false);
            }
            Err(err) => page.report(err.to_string(), true),
        }
    });
    outcome
}

async fn create_user(
    service: &UserService,
    page: &mut impl PageHandle,
    fields: &UserFields,
) -> Result<UserId, MutationError> {
    let user = service.create(fields).await?;
    page.with_page(|page| merge_created(&mut page.view, user))
}

async fn update_user(
    service: &UserService,
    page: &mut impl PageHandle,
    id: UserId,
    fields: &UserFields,
) -> Result<(), MutationError> {
    page.with_page(|page| ensure_loaded(&page.view, id))?;
    let user = service.update(id, fields).await?;
    page.with_page(|page| merge_updated(&mut page.view, id, user))
}

async fn delete_user(
    service: &UserService,
    page: &mut impl PageHandle,
    id: UserId,
) -> Result<User, MutationError> {
    page.with_page(|page| ensure_loaded(&page.view, id))?;
    service.delete(id).await?;
    page.with_page(|page| merge_deleted(&mut page.view, id))
}

fn begin(page: &mut UsersPage, key: MutationKey) -> Result<(), MutationError> {
    if page.pending.try_begin(key) {
        return Ok(());
    }
    let err = MutationError::AlreadyPending(key);
    warn!(%key, "request already in flight");
    page.report(err.to_string(), true);
    Err(err)
}

fn ensure_loaded(view: &UserListView, id: UserId) -> Result<(), MutationError> {
    if view.contains(id) {
        Ok(())
    } else {
        Err(ReconcileError::UnknownRecord(id).into())
    }
}

fn merge_loaded(view: &mut UserListView, users: Vec<User>) -> usize {
    let dropped = view.replace_all(users);
    if dropped > 0 {
        warn!(dropped, "ignored users with duplicate ids");
    }
    view.users().len()
}

fn merge_created(view: &mut UserListView, user: User) -> Result<UserId, MutationError> {
    let id = user.id;
    view.apply_created(user).map_err(conflict)?;
    info!(%id, "user created");
    Ok(id)
}

fn merge_updated(view: &mut UserListView, id: UserId, user: User) -> Result<(), MutationError> {
    view.apply_updated(id, user).map_err(conflict)?;
    info!(%id, "user updated");
    Ok(())
}

fn merge_deleted(view: &mut UserListView, id: UserId) -> Result<User, MutationError> {
    let removed = view.apply_deleted(id).map_err(conflict)?;
    info!(%id, "user deleted");
    Ok(removed)
}

fn conflict(err: ReconcileError) -> MutationError {
    warn!(error = %err, "could not merge response into the users list");
    MutationError::Conflict(err)
}
