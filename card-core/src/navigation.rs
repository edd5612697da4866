//! Navigation state machine - a stack of mounted screens.
//!
//! The stack starts at [`Route::Splash`] and only moves along the edges the
//! app defines:
//!
//! ```text
//! Splash ──replace──▶ Home ──push──▶ CardMaker ──push(CardData)──▶ Preview
//! ```
//!
//! Each mounted screen gets a fresh [`ScreenId`]. Delayed callbacks hold the
//! id of the screen that scheduled them, so the app can tell whether that
//! screen is still on top when the callback fires.

use std::fmt;

use uuid::Uuid;

use crate::{
    CardData, CardError, CardResult, Composer, HomeScreen, PreviewScreen, SplashScreen,
};

/// Unique identifier for one mounted screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(Uuid);

impl ScreenId {
    /// Create a new unique screen ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Logo screen shown at launch.
    Splash,
    /// Entry screen with the "Create New Card" action.
    Home,
    /// The card composer.
    CardMaker,
    /// Read-only view of a finished card.
    Preview,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Splash => "Splash",
            Self::Home => "Home",
            Self::CardMaker => "CardMaker",
            Self::Preview => "Preview",
        })
    }
}

/// State of a mounted screen.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Splash screen.
    Splash(SplashScreen),
    /// Home screen.
    Home(HomeScreen),
    /// Composer screen, owning the card being edited.
    Composer(Composer),
    /// Preview screen, owning its card snapshot.
    Preview(PreviewScreen),
}

impl Screen {
    /// The route this screen is mounted under.
    #[must_use]
    pub const fn route(&self) -> Route {
        match self {
            Self::Splash(_) => Route::Splash,
            Self::Home(_) => Route::Home,
            Self::Composer(_) => Route::CardMaker,
            Self::Preview(_) => Route::Preview,
        }
    }
}

/// A screen on the navigation stack.
#[derive(Debug, Clone)]
pub struct ScreenEntry {
    /// Identity of this mount.
    pub id: ScreenId,
    /// Screen state.
    pub screen: Screen,
}

impl ScreenEntry {
    fn mount(screen: Screen) -> Self {
        let entry = Self {
            id: ScreenId::new(),
            screen,
        };
        tracing::info!("Mounted {} ({})", entry.screen.route(), entry.id);
        entry
    }
}

/// A navigation request. Only [`Transition::PushPreview`] carries a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Replace the splash screen with Home; Splash leaves the history.
    ReplaceWithHome,
    /// Push a fresh composer on top of Home.
    PushComposer,
    /// Push a preview of the given card on top of the composer.
    PushPreview(CardData),
}

impl Transition {
    /// Route this transition leads to.
    #[must_use]
    pub const fn target(&self) -> Route {
        match self {
            Self::ReplaceWithHome => Route::Home,
            Self::PushComposer => Route::CardMaker,
            Self::PushPreview(_) => Route::Preview,
        }
    }

    /// Route the current screen must be on for this transition to apply.
    #[must_use]
    pub const fn source(&self) -> Route {
        match self {
            Self::ReplaceWithHome => Route::Splash,
            Self::PushComposer => Route::Home,
            Self::PushPreview(_) => Route::CardMaker,
        }
    }
}

/// Navigation stack. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    root: ScreenEntry,
    stack: Vec<ScreenEntry>,
}

impl Navigator {
    /// Create a navigator with the splash screen mounted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: ScreenEntry::mount(Screen::Splash(SplashScreen::new())),
            stack: Vec::new(),
        }
    }

    /// Apply a transition and return the id of the newly mounted screen.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidTransition`] if the current screen is not
    /// the transition's source. The stack is left unchanged.
    pub fn navigate(&mut self, transition: Transition) -> CardResult<ScreenId> {
        let from = self.current().screen.route();
        if from != transition.source() {
            return Err(CardError::InvalidTransition {
                from,
                to: transition.target(),
            });
        }
        tracing::debug!("Navigating {from} -> {}", transition.target());

        let id = match transition {
            Transition::ReplaceWithHome => {
                let entry = ScreenEntry::mount(Screen::Home(HomeScreen::new()));
                let id = entry.id;
                self.replace_top(entry);
                id
            }
            Transition::PushComposer => self.push(Screen::Composer(Composer::new())),
            Transition::PushPreview(card) => {
                self.push(Screen::Preview(PreviewScreen::new(card)))
            }
        };
        Ok(id)
    }

    fn push(&mut self, screen: Screen) -> ScreenId {
        let entry = ScreenEntry::mount(screen);
        let id = entry.id;
        self.stack.push(entry);
        id
    }

    fn replace_top(&mut self, entry: ScreenEntry) {
        match self.stack.last_mut() {
            Some(top) => *top = entry,
            None => self.root = entry,
        }
    }

    /// Pop the top screen. Returns `false` if only the root remains.
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(entry) => {
                tracing::debug!(
                    "Back from {} to {}",
                    entry.screen.route(),
                    self.current().screen.route()
                );
                true
            }
            None => false,
        }
    }

    /// The screen currently on top.
    #[must_use]
    pub fn current(&self) -> &ScreenEntry {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Mutable access to the screen currently on top.
    pub fn current_mut(&mut self) -> &mut ScreenEntry {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    /// Route of the screen currently on top.
    #[must_use]
    pub fn current_route(&self) -> Route {
        self.current().screen.route()
    }

    /// Whether `id` is the screen currently on top.
    #[must_use]
    pub fn is_current(&self, id: ScreenId) -> bool {
        self.current().id == id
    }

    /// Number of screens on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// Routes from bottom to top.
    pub fn routes(&self) -> impl Iterator<Item = Route> + '_ {
        std::iter::once(&self.root)
            .chain(self.stack.iter())
            .map(|entry| entry.screen.route())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
