//! The app driver: one navigator, one timer queue, events in, alerts out.
//!
//! Hosts call [`CardApp::handle`] for each user event and
//! [`CardApp::advance_to`] whenever time passes. Both take the current time
//! in milliseconds since the app started; the driver itself never sleeps.

use serde::{Deserialize, Serialize};

use crate::{
    Alert, CardError, CardResult, ImagePicker, Navigator, PickRequest, Route, Screen,
    ScreenEntry, ScreenId, TimerQueue, Transition, UiEvent,
};

/// Default time the splash screen stays up.
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 3000;

/// Default spinner time before Home and Composer navigate.
pub const DEFAULT_BUSY_DELAY_MS: u64 = 2000;

/// Timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long Splash stays before Home replaces it.
    pub splash_delay_ms: u64,
    /// How long the busy spinner shows before a user-triggered transition.
    pub busy_delay_ms: u64,
}

impl AppConfig {
    /// Configuration with every delay removed.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            splash_delay_ms: 0,
            busy_delay_ms: 0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            busy_delay_ms: DEFAULT_BUSY_DELAY_MS,
        }
    }
}

/// The whole app: navigation stack plus pending timers.
#[derive(Debug)]
pub struct CardApp {
    config: AppConfig,
    navigator: Navigator,
    timers: TimerQueue,
    alerts: Vec<Alert>,
    now_ms: u64,
}

impl CardApp {
    /// Launch the app at t=0 with Splash mounted and its timer running.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let navigator = Navigator::new();
        let mut timers = TimerQueue::new();
        timers.schedule(
            navigator.current().id,
            0,
            config.splash_delay_ms,
            Transition::ReplaceWithHome,
        );
        tracing::info!(
            "App started (splash {}ms, busy {}ms)",
            config.splash_delay_ms,
            config.busy_delay_ms
        );

        Self {
            config,
            navigator,
            timers,
            alerts: Vec::new(),
            now_ms: 0,
        }
    }

    /// Timing configuration.
    #[must_use]
    pub const fn config(&self) -> AppConfig {
        self.config
    }

    /// The navigation stack.
    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The screen currently on top.
    #[must_use]
    pub fn current(&self) -> &ScreenEntry {
        self.navigator.current()
    }

    /// Route of the screen currently on top.
    #[must_use]
    pub fn current_route(&self) -> Route {
        self.navigator.current_route()
    }

    /// Latest time seen, in ms since start.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// When the next timer fires, if any is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Drain alerts raised since the last call.
    pub fn take_alerts(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts)
    }

    /// Fire every timer due at or before `now_ms`.
    ///
    /// A timer whose owning screen is no longer on top is dropped.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        for timer in self.timers.take_due(self.now_ms) {
            self.fire(timer.owner, timer.action);
        }
    }

    fn fire(&mut self, owner: ScreenId, action: Transition) {
        if !self.navigator.is_current(owner) {
            tracing::debug!(
                "Dropping {} timer: screen {owner} is no longer active",
                action.target()
            );
            return;
        }

        match &mut self.navigator.current_mut().screen {
            Screen::Home(home) => home.finish(),
            Screen::Composer(composer) => composer.finish(),
            Screen::Splash(_) | Screen::Preview(_) => {}
        }

        if let Err(e) = self.navigator.navigate(action) {
            tracing::warn!("Timer transition rejected: {e}");
        }
    }

    /// Handle one user event at `now_ms`.
    ///
    /// Timers due by `now_ms` fire first. Edits sent while the composer is
    /// busy are absorbed without effect.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotApplicable`] if the event has no meaning on
    /// the current screen, including `Back` on the root. Nothing changes.
    pub fn handle(&mut self, event: UiEvent, now_ms: u64) -> CardResult<()> {
        self.advance_to(now_ms);
        if event == UiEvent::Back {
            if self.navigator.back() {
                return Ok(());
            }
            tracing::debug!("Back at root, nothing to pop");
            return Err(CardError::NotApplicable {
                event: event.name(),
                route: self.current_route(),
            });
        }

        let now_ms = self.now_ms;
        let busy_delay_ms = self.config.busy_delay_ms;
        let entry = self.navigator.current_mut();
        let owner = entry.id;

        match (event, &mut entry.screen) {
            (UiEvent::CreateCard, Screen::Home(home)) => {
                if home.press_create() {
                    self.timers
                        .schedule(owner, now_ms, busy_delay_ms, Transition::PushComposer);
                }
            }
            (UiEvent::Confirm, Screen::Composer(composer)) => {
                if let Some(snapshot) = composer.confirm() {
                    self.timers.schedule(
                        owner,
                        now_ms,
                        busy_delay_ms,
                        Transition::PushPreview(snapshot),
                    );
                }
            }
            (UiEvent::RecipientNameChanged(name), Screen::Composer(composer)) => {
                composer.set_recipient_name(name);
            }
            (UiEvent::MessageChanged(message), Screen::Composer(composer)) => {
                composer.set_message(message);
            }
            (UiEvent::ToggleBold, Screen::Composer(composer)) => composer.toggle_bold(),
            (UiEvent::ToggleItalic, Screen::Composer(composer)) => composer.toggle_italic(),
            (UiEvent::ToggleUnderline, Screen::Composer(composer)) => {
                composer.toggle_underline();
            }
            (UiEvent::BackgroundSelected(color), Screen::Composer(composer)) => {
                composer.select_background(color);
            }
            (UiEvent::FontFamilySelected(family), Screen::Composer(composer)) => {
                composer.select_font_family(family);
            }
            (UiEvent::FontSizeSelected(size), Screen::Composer(composer)) => {
                composer.select_font_size(size);
            }
            (UiEvent::DecorationAdded(decoration), Screen::Composer(composer)) => {
                composer.add_decoration(decoration);
            }
            (event, screen) => {
                let route = screen.route();
                tracing::debug!("Ignoring {} event on {route}", event.name());
                return Err(CardError::NotApplicable {
                    event: event.name(),
                    route,
                });
            }
        }
        Ok(())
    }

    /// Open the image picker from the composer and apply its result.
    ///
    /// Holds the app for the whole pick, so no other event is processed until
    /// the picker returns. Picker failures are handled by the composer and
    /// are not errors here.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotApplicable`] without launching the picker
    /// unless an idle composer is on top.
    pub async fn pick_image(&mut self, picker: &dyn ImagePicker) -> CardResult<()> {
        match &self.navigator.current().screen {
            Screen::Composer(composer) if !composer.busy().is_busy() => {}
            screen => {
                let route = screen.route();
                tracing::debug!("Ignoring image pick on {route}");
                return Err(CardError::NotApplicable {
                    event: "image",
                    route,
                });
            }
        }

        let result = picker.pick(&PickRequest::default()).await;

        if let Screen::Composer(composer) = &mut self.navigator.current_mut().screen {
            if let Some(alert) = composer.apply_pick_result(result) {
                self.alerts.push(alert);
            }
        }
        Ok(())
    }
}

impl Default for CardApp {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.splash_delay_ms, 3000);
        assert_eq!(config.busy_delay_ms, 2000);
    }

    #[test]
    fn test_config_partial_json() {
        let config: AppConfig =
            serde_json::from_str(r#"{"busy_delay_ms": 10}"#).expect("valid config");
        assert_eq!(config.splash_delay_ms, DEFAULT_SPLASH_DELAY_MS);
        assert_eq!(config.busy_delay_ms, 10);
    }

    #[test]
    fn test_splash_waits_for_full_delay() {
        let mut app = CardApp::default();
        assert_eq!(app.next_deadline(), Some(3000));
        app.advance_to(2999);
        assert_eq!(app.current_route(), Route::Splash);
        app.advance_to(3000);
        assert_eq!(app.current_route(), Route::Home);
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn test_time_does_not_go_backwards() {
        let mut app = CardApp::default();
        app.advance_to(500);
        app.advance_to(100);
        assert_eq!(app.now_ms(), 500);
    }

    #[test]
    fn test_events_for_other_screens_are_rejected() {
        let mut app = CardApp::default();
        let result = app.handle(UiEvent::ToggleBold, 10);
        assert!(matches!(
            result,
            Err(CardError::NotApplicable {
                event: "toggle-bold",
                route: Route::Splash
            })
        ));
        assert!(app.handle(UiEvent::Confirm, 20).is_err());
        assert_eq!(app.current_route(), Route::Splash);
        assert_eq!(app.next_deadline(), Some(3000));
    }

    #[test]
    fn test_back_on_root_splash_keeps_timer() {
        let mut app = CardApp::default();
        assert!(app.handle(UiEvent::Back, 100).is_err());
        app.advance_to(3000);
        assert_eq!(app.current_route(), Route::Home);
    }
}
