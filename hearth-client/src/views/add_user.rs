//! Add-user dialog view

use iced::widget::{Column, Id, Space, button, checkbox, column, container, row, text, text_input};
use iced::{Center, Element, Fill};

use hearth_client::dialog::{AddUserDialog, AddUserField};
use hearth_client::i18n::{t, t_args};
use hearth_common::validators::{
    self, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, NameError, PasswordError,
    UsernameError,
};

use super::layout::scrollable_modal;
use crate::style::{
    BUTTON_PADDING, CONTENT_PADDING, DIALOG_MAX_WIDTH, ELEMENT_SPACING, INPUT_PADDING,
    SMALL_TEXT_SIZE, SPACER_SIZE_MEDIUM, SPACER_SIZE_SMALL, TEXT_SIZE, error_text_style,
    modal_card_style, muted_text_style, panel_title, shaped_text, shaped_text_wrapped,
};
use crate::types::{InputId, Message};

/// Build the add-user modal
pub fn add_user_view(dialog: &AddUserDialog<Message>) -> Element<'_, Message> {
    let loading = dialog.is_loading();
    let mut items: Vec<Element<'_, Message>> = vec![panel_title(t("add-user-title")).into()];

    // Error code from the last attempt, shown verbatim
    if let Some(error) = dialog.error() {
        items.push(
            shaped_text_wrapped(error)
                .size(TEXT_SIZE)
                .width(Fill)
                .align_x(Center)
                .style(error_text_style)
                .into(),
        );
        items.push(Space::new().height(SPACER_SIZE_SMALL).into());
    } else {
        items.push(Space::new().height(SPACER_SIZE_MEDIUM).into());
    }

    let name_input = text_input(&t("add-user-name"), dialog.name())
        .on_input_maybe((!loading).then_some(Message::AddUserNameChanged))
        .on_submit(Message::AddUserSubmit)
        .id(Id::from(InputId::AddUserName))
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);
    items.push(labeled(t("add-user-name"), name_input.into()));
    push_hint(&mut items, name_hint(dialog));

    let username_input = text_input(&t("add-user-username"), dialog.username())
        .on_input_maybe((!loading).then_some(Message::AddUserUsernameChanged))
        .on_submit(Message::AddUserSubmit)
        .id(Id::from(InputId::AddUserUsername))
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);
    items.push(labeled(t("add-user-username"), username_input.into()));
    push_hint(&mut items, username_hint(dialog));

    let password_input = text_input(&t("add-user-password"), dialog.password())
        .on_input_maybe((!loading).then_some(Message::AddUserPasswordChanged))
        .on_submit(Message::AddUserSubmit)
        .id(Id::from(InputId::AddUserPassword))
        .secure(true)
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);
    items.push(labeled(t("add-user-password"), password_input.into()));
    push_hint(&mut items, password_hint(dialog));

    let admin_checkbox = checkbox(dialog.is_admin())
        .label(t("add-user-admin"))
        .on_toggle_maybe((!loading).then_some(Message::AddUserAdminToggled))
        .size(TEXT_SIZE)
        .text_shaping(text::Shaping::Advanced);
    items.push(admin_checkbox.into());

    if !dialog.is_admin() {
        items.push(
            shaped_text_wrapped(t("add-user-admin-note"))
                .size(SMALL_TEXT_SIZE)
                .style(muted_text_style)
                .into(),
        );
    }

    items.push(Space::new().height(SPACER_SIZE_MEDIUM).into());

    let cancel_button = button(shaped_text(t("button-cancel")).size(TEXT_SIZE))
        .on_press_maybe((!loading).then_some(Message::AddUserCancel))
        .padding(BUTTON_PADDING)
        .style(button::secondary);

    // Busy text replaces the primary action while the request runs
    let primary: Element<'_, Message> = if loading {
        container(
            shaped_text(t("add-user-creating"))
                .size(TEXT_SIZE)
                .style(muted_text_style),
        )
        .padding(BUTTON_PADDING)
        .into()
    } else {
        button(shaped_text(t("button-create")).size(TEXT_SIZE))
            .on_press_maybe(dialog.can_submit().then_some(Message::AddUserSubmit))
            .padding(BUTTON_PADDING)
            .into()
    };

    items.push(
        row![Space::new().width(Fill), cancel_button, primary]
            .spacing(ELEMENT_SPACING)
            .align_y(Center)
            .into(),
    );

    let form = Column::with_children(items)
        .spacing(ELEMENT_SPACING)
        .padding(CONTENT_PADDING)
        .max_width(DIALOG_MAX_WIDTH);

    // Backdrop clicks cancel; ignored by the dialog while loading
    scrollable_modal(
        container(form).style(modal_card_style),
        Message::AddUserCancel,
    )
}

// ============================================================================
// Helpers
// ============================================================================

fn labeled<'a>(label: String, input: Element<'a, Message>) -> Element<'a, Message> {
    column![
        shaped_text(label)
            .size(TEXT_SIZE)
            .style(muted_text_style),
        input
    ]
    .spacing(SPACER_SIZE_SMALL)
    .into()
}

fn push_hint(items: &mut Vec<Element<'_, Message>>, hint: Option<String>) {
    if let Some(hint) = hint {
        items.push(
            shaped_text_wrapped(hint)
                .size(SMALL_TEXT_SIZE)
                .style(error_text_style)
                .into(),
        );
    }
}

/// Inline hint for the name field; empty fields only disable the button
fn name_hint(dialog: &AddUserDialog<Message>) -> Option<String> {
    if !dialog.is_touched(AddUserField::Name) {
        return None;
    }
    match validators::validate_name(dialog.name()) {
        Err(NameError::TooLong) => Some(t_args(
            "err-name-too-long",
            &[("max", &MAX_NAME_LENGTH.to_string())],
        )),
        Err(NameError::InvalidCharacters) => Some(t("err-name-invalid-characters")),
        Err(NameError::Empty) | Ok(()) => None,
    }
}

fn username_hint(dialog: &AddUserDialog<Message>) -> Option<String> {
    if !dialog.is_touched(AddUserField::Username) {
        return None;
    }
    match validators::validate_username(dialog.username()) {
        Err(UsernameError::TooLong) => Some(t_args(
            "err-username-too-long",
            &[("max", &MAX_USERNAME_LENGTH.to_string())],
        )),
        Err(UsernameError::InvalidCharacters) => Some(t("err-username-invalid-characters")),
        Err(UsernameError::Empty) | Ok(()) => None,
    }
}

fn password_hint(dialog: &AddUserDialog<Message>) -> Option<String> {
    if !dialog.is_touched(AddUserField::Password) {
        return None;
    }
    match validators::validate_password(dialog.password()) {
        Err(PasswordError::TooLong) => Some(t_args(
            "err-password-too-long",
            &[("max", &MAX_PASSWORD_LENGTH.to_string())],
        )),
        Err(PasswordError::Empty) | Ok(()) => None,
    }
}
