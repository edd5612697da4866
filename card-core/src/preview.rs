//! Read-only rendering of a finished card.

use crate::{BackgroundColor, CardData, Decoration, FontFamily, FontSize, LocalImage, TextStyle};

/// Everything a host needs to draw one card, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Card background.
    pub background: BackgroundColor,
    /// Photo block, drawn first when present.
    pub photo: Option<LocalImage>,
    /// Recipient line, drawn bold above the message. Empty lines are skipped.
    pub recipient: Option<String>,
    /// Message lines.
    pub message_lines: Vec<String>,
    /// Message font family.
    pub font_family: FontFamily,
    /// Message font size.
    pub font_size: FontSize,
    /// Message style toggles.
    pub style: TextStyle,
    /// Decoration row along the bottom edge.
    pub decorations: Vec<Decoration>,
}

impl CardView {
    /// Build the view for a card. `placeholder` replaces an empty message.
    #[must_use]
    pub fn of(card: &CardData, placeholder: Option<&str>) -> Self {
        let message = match (card.message(), placeholder) {
            ("", Some(placeholder)) => placeholder,
            (message, _) => message,
        };
        let recipient = Some(card.recipient_name())
            .filter(|name| !name.trim().is_empty())
            .map(ToString::to_string);

        Self {
            background: card.background_color(),
            photo: card.image().as_local().cloned(),
            recipient,
            message_lines: message.lines().map(ToString::to_string).collect(),
            font_family: card.font_family(),
            font_size: card.font_size(),
            style: card.style(),
            decorations: card.decorations().to_vec(),
        }
    }

    /// The decoration row as a single string.
    #[must_use]
    pub fn decoration_row(&self) -> String {
        self.decorations
            .iter()
            .map(|d| d.symbol())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Terminal screen showing a card snapshot. There is no way to edit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewScreen {
    card: CardData,
}

impl PreviewScreen {
    /// Take ownership of the snapshot handed over by the composer.
    #[must_use]
    pub fn new(card: CardData) -> Self {
        Self { card }
    }

    /// The card being shown.
    #[must_use]
    pub fn card(&self) -> &CardData {
        &self.card
    }

    /// Render model for the card.
    #[must_use]
    pub fn view(&self) -> CardView {
        CardView::of(&self.card, None)
    }
}
