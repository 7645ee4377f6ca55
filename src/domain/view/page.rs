use crate::domain::entities::user::{User, UserFields, UserId};
use crate::domain::view::form::FormMode;
use crate::domain::view::list_view::UserListView;
use crate::domain::view::pending::{MutationKey, PendingMutations};

/// Line under the table reporting the last outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

/// Everything the users screen shows: the list, the open dialog, its
/// fields, and which requests are still in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct UsersPage {
    pub view: UserListView,
    pub mode: FormMode,
    pub form: UserFields,
    pub pending: PendingMutations,
    pub loading: bool,
    pub status: StatusLine,
}

impl UsersPage {
    pub fn new(page_size: usize) -> Self {
        Self {
            view: UserListView::new(page_size),
            mode: FormMode::default(),
            form: UserFields::default(),
            pending: PendingMutations::default(),
            loading: false,
            status: StatusLine::default(),
        }
    }

    pub fn begin_add(&mut self) {
        self.form = UserFields::default();
        self.mode = FormMode::Adding;
    }

    /// Opens the edit dialog filled with the record's fields. Unknown ids
    /// leave the page as it is.
    pub fn begin_edit(&mut self, id: UserId) -> bool {
        let Some(fields) = self.view.find(id).map(User::fields) else {
            return false;
        };
        self.form = fields;
        self.mode = FormMode::Editing(id);
        true
    }

    pub fn close_form(&mut self) {
        self.mode = FormMode::Viewing;
        self.form = UserFields::default();
    }

    /// Key of the request the open dialog would send.
    pub fn submit_key(&self) -> Option<MutationKey> {
        match self.mode {
            FormMode::Viewing => None,
            FormMode::Adding => Some(MutationKey::Create),
            FormMode::Editing(id) => Some(MutationKey::Record(id)),
        }
    }

    pub fn report(&mut self, message: impl Into<String>, is_error: bool) {
        self.status = StatusLine {
            message: message.into(),
            is_error,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_bob() -> UsersPage {
        let mut page = UsersPage::new(10);
        page.view.replace_all(vec![User::new(1, "Bob", "b@x.com")]);
        page
    }

    #[test]
    fn begin_edit_copies_the_record_into_the_form() {
        let mut page = page_with_bob();

        assert!(page.begin_edit(UserId(1)));

        assert_eq!(page.mode, FormMode::Editing(UserId(1)));
        assert_eq!(page.form, UserFields::new("Bob", "b@x.com"));
        assert_eq!(page.submit_key(), Some(MutationKey::Record(UserId(1))));
    }

    #[test]
    fn begin_edit_of_unknown_record_keeps_the_dialog_closed() {
        let mut page = page_with_bob();

        assert!(!page.begin_edit(UserId(7)));

        assert_eq!(page.mode, FormMode::Viewing);
        assert_eq!(page.submit_key(), None);
    }

    #[test]
    fn close_form_clears_the_fields() {
        let mut page = page_with_bob();
        page.begin_edit(UserId(1));

        page.close_form();

        assert_eq!(page.mode, FormMode::Viewing);
        assert_eq!(page.form, UserFields::default());
    }
}
