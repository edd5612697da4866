//! Entry screens and the shared busy indicator.

use crate::ImageFormat;

/// A read-only asset bundled with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAsset {
    /// Path relative to the app bundle.
    pub path: &'static str,
    /// Image format.
    pub format: ImageFormat,
}

/// App logo shown on Splash and Home.
pub const LOGO: StaticAsset = StaticAsset {
    path: "assets/images/CardCraft.png",
    format: ImageFormat::Png,
};

/// Cosmetic loading state shown before a delayed transition.
///
/// There is no way back from `Busy` other than the owning screen navigating
/// away (or being dismissed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BusyIndicator {
    /// Ready for input.
    #[default]
    Idle,
    /// Spinner shown; input is blocked.
    Busy,
}

impl BusyIndicator {
    /// Enter `Busy`. Returns `false` if already busy.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = Self::Busy;
        true
    }

    /// Return to `Idle`.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    /// Check if the spinner is showing.
    #[must_use]
    pub fn is_busy(self) -> bool {
        self == Self::Busy
    }
}

/// Launch screen. Has no input of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplashScreen {
    logo: StaticAsset,
}

impl SplashScreen {
    /// Create the splash screen.
    #[must_use]
    pub fn new() -> Self {
        Self { logo: LOGO }
    }

    /// The logo to display.
    #[must_use]
    pub const fn logo(&self) -> StaticAsset {
        self.logo
    }
}

impl Default for StaticAsset {
    fn default() -> Self {
        LOGO
    }
}

/// Entry screen with a single "Create New Card" action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeScreen {
    busy: BusyIndicator,
}

impl HomeScreen {
    /// Screen title.
    pub const TITLE: &'static str = "Birthday Card Maker";

    /// Label of the create action.
    pub const CREATE_LABEL: &'static str = "Create New Card";

    /// Create the home screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The logo to display.
    #[must_use]
    pub const fn logo(&self) -> StaticAsset {
        LOGO
    }

    /// Handle the create action. Returns `true` if the spinner started and
    /// the caller should schedule the transition to the composer.
    pub fn press_create(&mut self) -> bool {
        let started = self.busy.begin();
        if !started {
            tracing::debug!("Create pressed while busy, ignoring");
        }
        started
    }

    /// Hide the spinner once the delayed transition fires.
    pub fn finish(&mut self) {
        self.busy.finish();
    }

    /// Current busy state.
    #[must_use]
    pub const fn busy(&self) -> BusyIndicator {
        self.busy
    }
}
