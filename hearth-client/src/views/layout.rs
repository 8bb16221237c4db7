//! Top-level layout and panel wrappers

use iced::widget::{Column, Space, container, mouse_area, opaque, scrollable, stack};
use iced::{Element, Fill};

use hearth_client::dialog::AddUserDialog;

use super::add_user::add_user_view;
use super::users::users_view;
use crate::style::{content_background_style, modal_overlay_style};
use crate::types::{ConnectionStatus, Message, UsersPanelState};

/// Users panel, with the add-user dialog on top while it is open
pub fn main_layout<'a>(
    connection: &'a ConnectionStatus,
    users: &'a UsersPanelState,
    add_user: &'a AddUserDialog<Message>,
) -> Element<'a, Message> {
    let panel = users_view(connection, users);
    if add_user.is_open() {
        stack![panel, add_user_view(add_user)].into()
    } else {
        panel
    }
}

/// Wrap a form column in a scrollable, centered container
pub fn scrollable_panel(form: Column<'_, Message>) -> Element<'_, Message> {
    let scrollable_form = scrollable(container(form).width(Fill).center_x(Fill))
        .width(Fill)
        .height(iced::Length::Shrink);

    container(scrollable_form)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .style(content_background_style)
        .into()
}

/// Wrap dialog content in a scrollable, centered container over a dimmed backdrop
///
/// Pressing the backdrop emits `on_dismiss`; presses on the content itself
/// are swallowed by the card.
pub fn scrollable_modal<'a>(
    content: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let scrollable_form = scrollable(container(opaque(content)).width(Fill).center_x(Fill))
        .width(Fill)
        .height(iced::Length::Shrink);

    let backdrop = mouse_area(
        container(Space::new())
            .width(Fill)
            .height(Fill)
            .style(modal_overlay_style),
    )
    .on_press(on_dismiss);

    // Opaque so clicks never reach the panel below
    opaque(stack![
        backdrop,
        container(scrollable_form)
            .width(Fill)
            .height(Fill)
            .center(Fill),
    ])
}
