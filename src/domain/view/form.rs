use crate::domain::entities::user::UserId;

/// Which dialog the users screen shows. At most one can be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Viewing,
    Adding,
    Editing(UserId),
}

impl FormMode {
    pub fn is_open(self) -> bool {
        !matches!(self, FormMode::Viewing)
    }

    pub fn title(self) -> &'static str {
        match self {
            FormMode::Viewing => "",
            FormMode::Adding => "Add User",
            FormMode::Editing(_) => "Edit User",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Editing(_) => "Edit",
            _ => "Add",
        }
    }
}
