use std::collections::HashSet;

use thiserror::Error;

use crate::domain::entities::query::{FilterState, SortSpec};
use crate::domain::entities::user::{User, UserField, UserId};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A completed request could not be merged into the local collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("user {0} already exists")]
    DuplicateId(UserId),
    #[error("user {0} is not loaded")]
    UnknownRecord(UserId),
}

/// In-memory users plus the filter, sort and page state of the list screen.
///
/// Nothing derived is cached: `visible_page` filters, sorts and slices the
/// whole collection on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct UserListView {
    users: Vec<User>,
    filters: FilterState,
    sort: Option<SortSpec>,
    current_page: usize,
    page_size: usize,
}

impl Default for UserListView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl UserListView {
    pub fn new(page_size: usize) -> Self {
        Self {
            users: Vec::new(),
            filters: FilterState::default(),
            sort: None,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.find(id).is_some()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces one field's pattern. A changed pattern moves back to page 1.
    pub fn set_filter(&mut self, field: UserField, pattern: impl Into<String>) {
        if self.filters.set(field, pattern.into()) {
            self.current_page = 1;
        }
    }

    /// Same field flips the direction, another field sorts it ascending.
    pub fn set_sort(&mut self, field: UserField) {
        self.sort = Some(match self.sort {
            Some(current) if current.field == field => SortSpec {
                field,
                direction: current.direction.toggled(),
            },
            _ => SortSpec::ascending(field),
        });
    }

    /// Not range-checked; a page past the end is simply empty.
    pub fn goto_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn filtered_sorted(&self) -> Vec<&User> {
        let matcher = self.filters.matcher();
        let mut rows: Vec<&User> = self
            .users
            .iter()
            .filter(|user| matcher.matches(user))
            .collect();
        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| sort.compare(a, b));
        }
        rows
    }

    pub fn filtered_count(&self) -> usize {
        let matcher = self.filters.matcher();
        self.users.iter().filter(|user| matcher.matches(user)).count()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size)
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn visible_page(&self) -> Vec<&User> {
        let Some(skipped_pages) = self.current_page.checked_sub(1) else {
            return Vec::new();
        };
        let begin = skipped_pages.saturating_mul(self.page_size);
        self.filtered_sorted()
            .into_iter()
            .skip(begin)
            .take(self.page_size)
            .collect()
    }

    /// Swaps in a freshly fetched collection. Later duplicates of an id are
    /// dropped; the number dropped is returned.
    pub fn replace_all(&mut self, users: Vec<User>) -> usize {
        let incoming = users.len();
        let mut seen = HashSet::with_capacity(incoming);
        self.users = users
            .into_iter()
            .filter(|user| seen.insert(user.id))
            .collect();
        incoming - self.users.len()
    }

    pub fn apply_created(&mut self, user: User) -> Result<(), ReconcileError> {
        if self.contains(user.id) {
            return Err(ReconcileError::DuplicateId(user.id));
        }
        self.users.push(user);
        Ok(())
    }

    /// The stored record keeps `id` even if the server echoed another one.
    pub fn apply_updated(&mut self, id: UserId, mut user: User) -> Result<(), ReconcileError> {
        let slot = self
            .users
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(ReconcileError::UnknownRecord(id))?;
        user.id = id;
        *slot = user;
        Ok(())
    }

    pub fn apply_deleted(&mut self, id: UserId) -> Result<User, ReconcileError> {
        let index = self
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(ReconcileError::UnknownRecord(id))?;
        Ok(self.users.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::query::SortDirection;

    fn bob_and_ann() -> UserListView {
        let mut view = UserListView::new(10);
        view.replace_all(vec![
            User::new(1, "Bob", "b@x.com"),
            User::new(2, "Ann", "a@x.com"),
        ]);
        view
    }

    fn names(users: &[&User]) -> Vec<String> {
        users.iter().map(|user| user.name.clone()).collect()
    }

    #[test]
    fn unsorted_view_keeps_collection_order() {
        let view = bob_and_ann();
        assert_eq!(names(&view.visible_page()), vec!["Bob", "Ann"]);
    }

    #[test]
    fn set_sort_twice_flips_direction() {
        let mut view = bob_and_ann();

        view.set_sort(UserField::Name);
        assert_eq!(names(&view.visible_page()), vec!["Ann", "Bob"]);

        view.set_sort(UserField::Name);
        assert_eq!(names(&view.visible_page()), vec!["Bob", "Ann"]);
        assert_eq!(
            view.sort().map(|sort| sort.direction),
            Some(SortDirection::Desc)
        );
    }

    #[test]
    fn switching_sort_field_starts_ascending() {
        let mut view = bob_and_ann();
        view.set_sort(UserField::Name);
        view.set_sort(UserField::Name);
        view.set_sort(UserField::Email);

        assert_eq!(view.sort(), Some(SortSpec::ascending(UserField::Email)));
        assert_eq!(names(&view.visible_page()), vec!["Ann", "Bob"]);
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let mut view = bob_and_ann();
        view.set_filter(UserField::Name, "an");

        let visible = view.visible_page();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, UserId(2));
    }

    #[test]
    fn changed_filter_returns_to_first_page() {
        let mut view = bob_and_ann();
        view.goto_page(4);
        view.set_filter(UserField::Email, "");
        assert_eq!(view.current_page(), 4, "unchanged pattern keeps the page");

        view.set_filter(UserField::Email, "x.com");
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn third_page_holds_the_remainder() {
        let mut view = UserListView::new(10);
        view.replace_all(
            (1..=25)
                .map(|id| User::new(id, format!("user {id:02}"), format!("u{id}@x.com")))
                .collect(),
        );
        view.set_sort(UserField::Name);
        view.goto_page(3);

        let ids: Vec<i64> = view.visible_page().iter().map(|user| user.id.0).collect();
        assert_eq!(ids, vec![21, 22, 23, 24, 25]);
        assert_eq!(view.total_pages(), 3);
        assert!(view.has_previous_page());
        assert!(!view.has_next_page());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let mut view = bob_and_ann();
        view.goto_page(0);
        assert!(view.visible_page().is_empty());
        view.goto_page(7);
        assert!(view.visible_page().is_empty());
    }

    #[test]
    fn next_page_follows_filtered_count() {
        let mut view = UserListView::new(1);
        view.replace_all(vec![
            User::new(1, "Bob", "b@x.com"),
            User::new(2, "Ann", "a@x.com"),
        ]);
        assert!(view.has_next_page());

        view.set_filter(UserField::Name, "bob");
        assert!(!view.has_next_page());
    }

    #[test]
    fn replace_all_drops_duplicate_ids() {
        let mut view = UserListView::new(10);
        let dropped = view.replace_all(vec![
            User::new(1, "Bob", "b@x.com"),
            User::new(1, "Bobby", "bobby@x.com"),
        ]);

        assert_eq!(dropped, 1);
        assert_eq!(view.users().len(), 1);
        assert_eq!(view.users()[0].name, "Bob");
    }

    #[test]
    fn apply_created_rejects_existing_id() {
        let mut view = bob_and_ann();
        let result = view.apply_created(User::new(2, "Ann again", "ann@x.com"));

        assert_eq!(result, Err(ReconcileError::DuplicateId(UserId(2))));
        assert_eq!(view.users().len(), 2);
    }

    #[test]
    fn apply_updated_pins_requested_id() {
        let mut view = bob_and_ann();
        view.apply_updated(UserId(1), User::new(99, "Robert", "r@x.com"))
            .expect("user 1 should be updated");

        let updated = view.find(UserId(1)).expect("user 1 should remain");
        assert_eq!(updated.name, "Robert");
        assert!(!view.contains(UserId(99)));
    }

    #[test]
    fn apply_deleted_keeps_relative_order() {
        let mut view = UserListView::new(10);
        view.replace_all(vec![
            User::new(3, "Cid", "c@x.com"),
            User::new(1, "Bob", "b@x.com"),
            User::new(2, "Ann", "a@x.com"),
        ]);

        let removed = view.apply_deleted(UserId(1)).expect("user 1 should be removed");
        assert_eq!(removed.name, "Bob");
        let ids: Vec<UserId> = view.users().iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![UserId(3), UserId(2)]);

        assert_eq!(
            view.apply_deleted(UserId(1)),
            Err(ReconcileError::UnknownRecord(UserId(1)))
        );
    }
}
