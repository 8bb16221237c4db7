//! Widget identifiers

use iced::widget::Id;

use hearth_client::dialog::AddUserField;

/// Text inputs that can be focused programmatically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    AddUserName,
    AddUserUsername,
    AddUserPassword,
}

impl InputId {
    /// Tab order of the add-user form
    pub const ADD_USER_ORDER: [InputId; 3] = [
        InputId::AddUserName,
        InputId::AddUserUsername,
        InputId::AddUserPassword,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::AddUserName => "add-user-name",
            Self::AddUserUsername => "add-user-username",
            Self::AddUserPassword => "add-user-password",
        }
    }

    /// Dialog field backed by this input
    pub fn field(self) -> AddUserField {
        match self {
            Self::AddUserName => AddUserField::Name,
            Self::AddUserUsername => AddUserField::Username,
            Self::AddUserPassword => AddUserField::Password,
        }
    }

    /// Input that follows this one when Tab is pressed
    pub fn next(self) -> InputId {
        let order = Self::ADD_USER_ORDER;
        let index = order.iter().position(|id| *id == self).unwrap_or(0);
        order[(index + 1) % order.len()]
    }
}

impl From<InputId> for Id {
    fn from(id: InputId) -> Self {
        Id::new(id.as_str())
    }
}
