//! Users panel view

use iced::widget::{Column, Space, button, column, container, row};
use iced::{Center, Element, Fill};

use hearth_client::i18n::{t, t_args};
use hearth_common::protocol::User;

use super::layout::scrollable_panel;
use crate::style::{
    BADGE_PADDING, BUTTON_PADDING, CONTENT_MAX_WIDTH, CONTENT_PADDING, ELEMENT_SPACING,
    ROW_PADDING, SMALL_TEXT_SIZE, TEXT_SIZE, TITLE_ROW_HEIGHT, TITLE_SIZE, alternating_row_style,
    badge_style, error_text_style, muted_text_style, shaped_text, shaped_text_wrapped,
};
use crate::types::{ConnectionStatus, Message, UsersPanelState};

/// Build the users panel
pub fn users_view<'a>(
    connection: &'a ConnectionStatus,
    users: &'a UsersPanelState,
) -> Element<'a, Message> {
    let can_add = matches!(connection, ConnectionStatus::Connected(_)) && users.is_loaded();

    let add_button = button(shaped_text(t("button-add-user")).size(TEXT_SIZE))
        .on_press_maybe(can_add.then_some(Message::OpenAddUser))
        .padding(BUTTON_PADDING);

    let title_row = row![
        shaped_text(t("users-title")).size(TITLE_SIZE).width(Fill),
        add_button,
    ]
    .height(TITLE_ROW_HEIGHT)
    .align_y(Center);

    let mut items: Vec<Element<'a, Message>> = vec![title_row.into()];

    match connection {
        ConnectionStatus::Disconnected => {}
        ConnectionStatus::Connecting(server) => {
            items.push(status_text(t_args(
                "connection-connecting",
                &[("server", server)],
            )));
        }
        ConnectionStatus::Failed(error) => {
            items.push(
                shaped_text_wrapped(error.as_str())
                    .size(TEXT_SIZE)
                    .width(Fill)
                    .style(error_text_style)
                    .into(),
            );
            items.push(
                button(shaped_text(t("button-reconnect")).size(TEXT_SIZE))
                    .on_press(Message::Connect)
                    .padding(BUTTON_PADDING)
                    .style(button::secondary)
                    .into(),
            );
        }
        ConnectionStatus::Connected(_) => items.extend(list_items(users)),
    }

    let form = Column::with_children(items)
        .spacing(ELEMENT_SPACING)
        .padding(CONTENT_PADDING)
        .max_width(CONTENT_MAX_WIDTH);

    scrollable_panel(form)
}

/// Rows for the loaded list, or its loading/error/empty state
fn list_items(users: &UsersPanelState) -> Vec<Element<'_, Message>> {
    match &users.users {
        None => vec![status_text(t("users-loading"))],
        Some(Err(error)) => vec![
            shaped_text_wrapped(error.as_str())
                .size(TEXT_SIZE)
                .width(Fill)
                .style(error_text_style)
                .into(),
        ],
        Some(Ok(_)) => {
            let visible = users.visible_users();
            if visible.is_empty() {
                return vec![status_text(t("users-empty"))];
            }
            let rows = visible
                .into_iter()
                .enumerate()
                .map(|(index, user)| user_row(user, index % 2 == 0));
            vec![Column::with_children(rows).width(Fill).into()]
        }
    }
}

fn user_row(user: &User, is_even: bool) -> Element<'_, Message> {
    let mut line = row![shaped_text(user.name.as_str()).size(TEXT_SIZE).width(Fill)]
        .spacing(ELEMENT_SPACING)
        .align_y(Center);

    if user.is_owner {
        line = line.push(badge(t("users-label-owner")));
    }
    if user.is_admin() {
        line = line.push(badge(t("users-label-admin")));
    }
    if !user.is_active {
        line = line.push(
            shaped_text(t("users-label-inactive"))
                .size(SMALL_TEXT_SIZE)
                .style(muted_text_style),
        );
    }

    container(line)
        .width(Fill)
        .padding(ROW_PADDING)
        .style(alternating_row_style(is_even))
        .into()
}

fn badge<'a>(label: String) -> Element<'a, Message> {
    container(shaped_text(label).size(SMALL_TEXT_SIZE))
        .padding(BADGE_PADDING)
        .style(badge_style)
        .into()
}

fn status_text<'a>(message: String) -> Element<'a, Message> {
    column![
        Space::new().height(ELEMENT_SPACING),
        shaped_text(message)
            .size(TEXT_SIZE)
            .width(Fill)
            .align_x(Center)
            .style(muted_text_style),
    ]
    .into()
}
