//! Hearth Admin - GUI Application
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod handlers;
mod style;
mod types;
mod views;

use iced::{Element, Subscription, Task, event, keyboard, mouse, window};
use tracing_subscriber::EnvFilter;

use hearth_client::config::Config;
use hearth_client::dialog::AddUserDialog;
use hearth_client::i18n::{self, t};
use style::{WINDOW_HEIGHT_MIN, WINDOW_WIDTH_MIN};
use types::{ConnectionStatus, Message, UsersPanelState};

/// Application entry point
///
/// Sets up logging and localization, then starts the event loop.
pub fn main() -> iced::Result {
    init_logging();

    // wss:// connections need a process-wide crypto provider
    if tokio_rustls::rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("crypto provider already installed");
    }

    let config = Config::load();
    let locale = i18n::init(config.settings.locale.as_deref());
    tracing::debug!(locale, "localization initialised");

    let window_size = iced::Size::new(config.settings.window_width, config.settings.window_height);

    // Boot is `Fn`, each call takes its own copy
    let boot = move || HearthApp::new(config.clone());

    iced::application(boot, HearthApp::update, HearthApp::view)
        .title(HearthApp::title)
        .subscription(HearthApp::subscription)
        .window(window::Settings {
            size: window_size,
            min_size: Some(iced::Size::new(WINDOW_WIDTH_MIN, WINDOW_HEIGHT_MIN)),
            exit_on_close_request: false,
            ..Default::default()
        })
        .run()
}

/// Log to stderr, `info` unless `RUST_LOG` says otherwise
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }
}

/// Main application state
struct HearthApp {
    /// Persisted configuration
    config: Config,
    /// Dashboard session
    connection: ConnectionStatus,
    /// Users list
    users: UsersPanelState,
    /// Add-user modal
    add_user: AddUserDialog<Message>,
}

impl HearthApp {
    /// Initialize state from the loaded config and start connecting
    fn new(config: Config) -> (Self, Task<Message>) {
        (Self::with_config(config), Task::done(Message::Connect))
    }

    fn with_config(config: Config) -> Self {
        Self {
            config,
            connection: ConnectionStatus::default(),
            users: UsersPanelState::default(),
            add_user: AddUserDialog::new(),
        }
    }

    /// Window title in the active locale
    fn title(&self) -> String {
        t("app-title")
    }

    /// Central message dispatcher
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Events
            Message::Event(event) => self.handle_keyboard_event(event),
            Message::PointerReleased => self.handle_pointer_released(),
            Message::TabPressed => self.handle_tab_navigation(),
            Message::WindowCloseRequested(id) => window::size(id).map(move |size| {
                Message::WindowSaveAndClose {
                    id,
                    width: size.width,
                    height: size.height,
                }
            }),
            Message::WindowSaveAndClose { id, width, height } => {
                self.config.settings.window_width = width;
                self.config.settings.window_height = height;
                if let Err(e) = self.config.save() {
                    tracing::warn!(error = %e, "failed to save window size");
                }
                if let Some(connection) = self.connection.connection() {
                    connection.shutdown();
                }
                window::close(id)
            }

            // Connection
            Message::Connect => self.handle_connect(),
            Message::Connected(result) => self.handle_connected(result),
            Message::ConnectionClosed => self.handle_connection_closed(),

            // Users panel
            Message::UsersLoaded(result) => self.handle_users_loaded(result),
            Message::OpenAddUser => self.handle_open_add_user(),
            Message::UserAdded(user) => self.handle_user_added(user),

            // Add user dialog
            Message::AddUserNameChanged(name) => self.handle_add_user_name_changed(name),
            Message::AddUserUsernameChanged(username) => {
                self.handle_add_user_username_changed(username)
            }
            Message::AddUserPasswordChanged(password) => {
                self.handle_add_user_password_changed(password)
            }
            Message::AddUserAdminToggled(is_admin) => self.handle_add_user_admin_toggled(is_admin),
            Message::AddUserSubmit => self.handle_add_user_submit(),
            Message::AddUserCancel => self.handle_add_user_cancel(),
            Message::AddUserFinished(result) => self.handle_add_user_finished(result),
            Message::AddUserTabFocusResult(focused) => self.handle_add_user_tab_focus_result(focused),
            Message::AddUserPointerFocusResult(focused) => {
                self.handle_add_user_pointer_focus_result(focused)
            }
        }
    }

    /// Event subscriptions
    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            event::listen_with(filter_event),
            window::close_requests().map(Message::WindowCloseRequested),
        ])
    }

    /// Render the current state
    fn view(&self) -> Element<'_, Message> {
        views::main_layout(&self.connection, &self.users, &self.add_user)
    }
}

/// Select the events the application reacts to
///
/// Pointer releases and Escape are forwarded even when a widget captured
/// them: a click on a text input moves focus, and Escape must close the
/// dialog while an input has focus.
fn filter_event(event: iced::Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if matches!(
        event,
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    ) {
        return Some(Message::PointerReleased);
    }

    let is_escape = matches!(
        event,
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        })
    );
    let is_uncaptured_key =
        matches!(event, iced::Event::Keyboard(_)) && status == event::Status::Ignored;

    (is_escape || is_uncaptured_key).then_some(Message::Event(event))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_keeps_loaded_config() {
        let mut config = Config::default();
        config.settings.server_url = "http://hearth.local:8123".to_string();
        config.settings.window_width = 1000.0;

        let app = HearthApp::with_config(config);

        assert_eq!(app.config.settings.server_url, "http://hearth.local:8123");
        assert_eq!(app.config.settings.window_width, 1000.0);
        assert!(!app.add_user.is_open());
    }

    #[test]
    fn test_title_is_localized() {
        let app = HearthApp::with_config(Config::default());
        assert_eq!(app.title(), "Hearth Admin");
    }

    #[test]
    fn test_backdrop_click_closes_idle_dialog() {
        let mut app = HearthApp::with_config(Config::default());
        let _ = app.handle_open_add_user();
        assert!(app.add_user.is_open());

        let _ = app.update(Message::AddUserCancel);

        assert!(!app.add_user.is_open());
    }

    #[test]
    fn test_backdrop_click_ignored_while_submitting() {
        let mut app = HearthApp::with_config(Config::default());
        let _ = app.handle_open_add_user();
        app.add_user.set_name("Jane".to_string());
        app.add_user.set_username("jane".to_string());
        app.add_user.set_password("secret".to_string());
        assert!(app.add_user.begin_submit().is_some());

        let _ = app.update(Message::AddUserCancel);

        assert!(app.add_user.is_open());
        assert!(app.add_user.is_loading());
    }
}
