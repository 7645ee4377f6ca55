pub mod form;
pub mod list_view;
pub mod page;
pub mod pending;
