// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the pricing panel, localization, the
//! checkout client and toast notifications, and translates panel events
//! into side effects (the checkout request and the browser launch).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::Navigator;
use crate::checkout::CheckoutClient;
use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::I18n;
use crate::infrastructure::SystemBrowser;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Notification};
use crate::ui::pricing_panel;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    panel: pricing_panel::State,
    checkout: Result<CheckoutClient, Error>,
    navigator: Box<dyn Navigator>,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("panel", &self.panel)
            .field("checkout_ready", &self.checkout.is_ok())
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

pub const MIN_WINDOW_WIDTH: f32 = 520.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_navigator(&config, flags, Box::new(SystemBrowser));

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Builds the application from loaded settings. CLI flags win over the
    /// settings file.
    pub fn with_navigator(config: &Config, flags: Flags, navigator: Box<dyn Navigator>) -> Self {
        let i18n = I18n::new(flags.lang, config);

        let endpoint = flags
            .endpoint
            .as_deref()
            .unwrap_or_else(|| config.checkout_endpoint());
        let checkout = CheckoutClient::new(endpoint, config.checkout_timeout());
        match &checkout {
            Ok(client) => tracing::info!(endpoint = %client.endpoint(), "checkout client ready"),
            Err(err) => tracing::error!(endpoint, error = %err, "invalid checkout endpoint"),
        }

        let initial_capital = flags
            .capital
            .as_deref()
            .unwrap_or_else(|| config.initial_capital());

        Self {
            i18n,
            panel: pricing_panel::State::new(initial_capital),
            checkout,
            navigator,
            notifications: notifications::Manager::new(),
            theme_mode: config.general.theme_mode,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_loading_subscription(self.panel.is_submitting()),
            subscription::create_notification_subscription(
                self.notifications.has_expiring_notifications(),
            ),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            panel: &mut self.panel,
            checkout: &self.checkout,
            navigator: self.navigator.as_ref(),
            notifications: &mut self.notifications,
        };

        match message {
            Message::Panel(panel_message) => update::handle_panel_message(&mut ctx, panel_message),
            Message::CheckoutFinished(result) => update::handle_checkout_finished(&mut ctx, result),
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            panel: &self.panel,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn panel(&self) -> &pricing_panel::State {
        &self.panel
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::NavigationError;
    use crate::checkout::CheckoutError;
    use crate::ui::notifications::Severity;
    use crate::ui::pricing_panel::{CtaState, Message as PanelMessage};
    use std::cell::RefCell;
    use std::rc::Rc;
    use url::Url;

    #[derive(Default, Clone)]
    struct RecordingNavigator {
        visited: Rc<RefCell<Vec<Url>>>,
        fail: bool,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &Url) -> Result<(), NavigationError> {
            self.visited.borrow_mut().push(url.clone());
            if self.fail {
                Err(NavigationError("no opener".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn app_with(navigator: RecordingNavigator, capital: &str) -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            capital: Some(capital.to_string()),
            endpoint: Some("http://127.0.0.1:9/api".to_string()),
            ..Flags::default()
        };
        App::with_navigator(&Config::default(), flags, Box::new(navigator))
    }

    fn submit(app: &mut App) {
        let _ = app.update(Message::Panel(PanelMessage::TermsToggled(true)));
        let _ = app.update(Message::Panel(PanelMessage::CtaPressed));
        assert!(app.panel().is_submitting());
    }

    #[test]
    fn flags_override_settings() {
        let app = app_with(RecordingNavigator::default(), "10 000");
        assert_eq!(app.panel().capital_text(), "10 000");
        assert_eq!(app.title(), "Pricing - Start your journey");
        assert!(app.checkout.is_ok());
    }

    #[test]
    fn success_navigates_and_never_re_enables() {
        let navigator = RecordingNavigator::default();
        let mut app = app_with(navigator.clone(), "5000");
        submit(&mut app);

        let url = Url::parse("https://pay.example/x").expect("valid url");
        let _ = app.update(Message::CheckoutFinished(Ok(url.clone())));

        assert_eq!(navigator.visited.borrow().as_slice(), &[url.clone()]);
        assert_eq!(app.panel().cta(), &CtaState::Redirected { url });
        assert!(!app.panel().cta_enabled());
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn failure_restores_button_and_shows_error() {
        let navigator = RecordingNavigator::default();
        let mut app = app_with(navigator.clone(), "5000");
        submit(&mut app);

        let _ = app.update(Message::CheckoutFinished(Err(CheckoutError::MissingCheckoutUrl)));

        assert_eq!(app.panel().cta(), &CtaState::Idle);
        assert!(app.panel().cta_enabled());
        assert!(navigator.visited.borrow().is_empty());

        let toast = app.notifications().visible().next().expect("error toast shown");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "error-toast");
        assert_eq!(
            app.i18n.tr_with_args("error-toast", &[("message", toast.message_args()[0].1.as_str())]),
            "Error: No checkout URL received"
        );
        assert!(!app.notifications().has_expiring_notifications());
    }

    #[test]
    fn retry_clears_previous_error() {
        let mut app = app_with(RecordingNavigator::default(), "5000");
        submit(&mut app);
        let _ = app.update(Message::CheckoutFinished(Err(CheckoutError::Server {
            status: 500,
            message: "Server error: 500".to_string(),
        })));
        assert_eq!(app.notifications().visible_count(), 1);

        let _ = app.update(Message::Panel(PanelMessage::CtaPressed));
        assert!(app.panel().is_submitting());
        assert_eq!(app.notifications().visible_count(), 0);
    }

    #[test]
    fn browser_failure_keeps_redirected_state() {
        let navigator = RecordingNavigator {
            fail: true,
            ..RecordingNavigator::default()
        };
        let mut app = app_with(navigator, "5000");
        submit(&mut app);

        let url = Url::parse("https://pay.example/x").expect("valid url");
        let _ = app.update(Message::CheckoutFinished(Ok(url.clone())));

        assert_eq!(app.panel().cta(), &CtaState::Redirected { url });
        let toast = app.notifications().visible().next().expect("fallback toast shown");
        assert_eq!(toast.message_key(), "notification-browser-error");
    }

    #[test]
    fn invalid_endpoint_fails_checkout_immediately() {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            endpoint: Some("not a url".to_string()),
            ..Flags::default()
        };
        let mut app = App::with_navigator(
            &Config::default(),
            flags,
            Box::new(RecordingNavigator::default()),
        );
        let _ = app.update(Message::Panel(PanelMessage::TermsToggled(true)));
        let _ = app.update(Message::Panel(PanelMessage::CtaPressed));

        assert_eq!(app.panel().cta(), &CtaState::Idle);
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn loading_ticks_rotate_label_only_while_submitting() {
        let mut app = app_with(RecordingNavigator::default(), "5000");
        submit(&mut app);
        let _ = app.update(Message::Panel(PanelMessage::LoadingTick));

        match app.panel().cta() {
            CtaState::Submitting { step } => assert_eq!(step.value(), 2),
            other => panic!("expected submitting, got {other:?}"),
        }
    }
}
