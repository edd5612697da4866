//! Composer screen - builds a [`CardData`] from form input.
//!
//! Every handler replaces the card with an edited copy; nothing is mutated in
//! place. While the busy spinner is up the form is covered, so edits are
//! dropped until the screen navigates away.

use crate::{
    BackgroundColor, BusyIndicator, CardData, CardView, Decoration, FontFamily, FontSize,
    ImageRef, PickError, PickOutcome,
};

/// Shown in the live preview while the message is empty.
pub const MESSAGE_PLACEHOLDER: &str = "Your message will appear here";

/// A blocking notice for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Alert {
    /// Notice shown when media library access is refused.
    #[must_use]
    pub fn permission_denied() -> Self {
        Self {
            title: "Permission required".to_string(),
            message: "Sorry, we need media library permissions to add a photo to your card."
                .to_string(),
        }
    }
}

/// The card editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    card: CardData,
    busy: BusyIndicator,
}

impl Composer {
    /// Create a composer holding a blank card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The card as currently edited.
    #[must_use]
    pub fn card(&self) -> &CardData {
        &self.card
    }

    /// Current busy state.
    #[must_use]
    pub const fn busy(&self) -> BusyIndicator {
        self.busy
    }

    /// Whether `color` is the highlighted swatch. Exactly one is.
    #[must_use]
    pub fn is_selected(&self, color: BackgroundColor) -> bool {
        self.card.background_color() == color
    }

    /// In-editor view of the card, with a placeholder for an empty message.
    #[must_use]
    pub fn live_preview(&self) -> CardView {
        CardView::of(&self.card, Some(MESSAGE_PLACEHOLDER))
    }

    fn edit(&mut self, what: &str, f: impl FnOnce(&CardData) -> CardData) {
        if self.busy.is_busy() {
            tracing::debug!("Ignoring {what} edit while busy");
            return;
        }
        self.card = f(&self.card);
    }

    /// Replace the recipient name. Any string is accepted.
    pub fn set_recipient_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.edit("recipient name", |card| card.with_recipient_name(name));
    }

    /// Replace the message. Any string is accepted.
    pub fn set_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.edit("message", |card| card.with_message(message));
    }

    /// Flip bold.
    pub fn toggle_bold(&mut self) {
        self.edit("bold", CardData::toggled_bold);
    }

    /// Flip italic.
    pub fn toggle_italic(&mut self) {
        self.edit("italic", CardData::toggled_italic);
    }

    /// Flip underline.
    pub fn toggle_underline(&mut self) {
        self.edit("underline", CardData::toggled_underline);
    }

    /// Select the background swatch.
    pub fn select_background(&mut self, color: BackgroundColor) {
        self.edit("background", |card| card.with_background(color));
    }

    /// Select the message font family.
    pub fn select_font_family(&mut self, family: FontFamily) {
        self.edit("font family", |card| card.with_font_family(family));
    }

    /// Select the message font size.
    pub fn select_font_size(&mut self, size: FontSize) {
        self.edit("font size", |card| card.with_font_size(size));
    }

    /// Append a decoration.
    pub fn add_decoration(&mut self, decoration: Decoration) {
        self.edit("decoration", |card| card.with_decoration(decoration));
    }

    /// Apply what the image picker returned.
    ///
    /// A selection replaces the photo. Cancellation and failures leave the
    /// card as it was; a permission denial also produces an [`Alert`].
    pub fn apply_pick_result(&mut self, result: Result<PickOutcome, PickError>) -> Option<Alert> {
        match result {
            Ok(PickOutcome::Selected(image)) => {
                tracing::debug!("Photo selected: {}", image.uri);
                self.edit("image", |card| card.with_image(ImageRef::Local(image)));
                None
            }
            Ok(PickOutcome::Cancelled) => {
                tracing::debug!("Image pick cancelled");
                None
            }
            Err(PickError::PermissionDenied) => {
                tracing::warn!("Media library permission denied");
                Some(Alert::permission_denied())
            }
            Err(e @ PickError::Failed(_)) => {
                tracing::error!("Error picking image: {e}");
                None
            }
        }
    }

    /// Handle the preview action.
    ///
    /// Returns the card snapshot to hand to the preview screen once the
    /// spinner delay has elapsed, or `None` if already busy.
    pub fn confirm(&mut self) -> Option<CardData> {
        if !self.busy.begin() {
            tracing::debug!("Preview pressed while busy, ignoring");
            return None;
        }
        Some(self.card.clone())
    }

    /// Hide the spinner once the delayed transition fires.
    pub fn finish(&mut self) {
        self.busy.finish();
    }
}
