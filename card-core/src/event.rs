//! Discrete user input routed by the app.

use crate::{BackgroundColor, Decoration, FontFamily, FontSize};

/// All user input the app can receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// "Create New Card" on Home.
    CreateCard,
    /// Recipient field edited.
    RecipientNameChanged(String),
    /// Message field edited.
    MessageChanged(String),
    /// Bold button.
    ToggleBold,
    /// Italic button.
    ToggleItalic,
    /// Underline button.
    ToggleUnderline,
    /// Color swatch tapped.
    BackgroundSelected(BackgroundColor),
    /// Font family picker changed.
    FontFamilySelected(FontFamily),
    /// Font size picker changed.
    FontSizeSelected(FontSize),
    /// Decoration button tapped.
    DecorationAdded(Decoration),
    /// "Preview Card" in the composer.
    Confirm,
    /// Platform back gesture.
    Back,
}

impl UiEvent {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateCard => "create-card",
            Self::RecipientNameChanged(_) => "recipient-name",
            Self::MessageChanged(_) => "message",
            Self::ToggleBold => "toggle-bold",
            Self::ToggleItalic => "toggle-italic",
            Self::ToggleUnderline => "toggle-underline",
            Self::BackgroundSelected(_) => "background",
            Self::FontFamilySelected(_) => "font-family",
            Self::FontSizeSelected(_) => "font-size",
            Self::DecorationAdded(_) => "decoration",
            Self::Confirm => "confirm",
            Self::Back => "back",
        }
    }
}
